//! Pixel color classification.
//!
//! A level pixel is packed as `R << 24 | G << 16 | B << 8 | 0xFF` and looked
//! up by exact equality against a fixed table. The alpha byte of the source
//! pixel is ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Empty,
    Terrain,
    PlayerSpawn,
    Feather,
    GoldCoin,
    Goal,
}

/// Packs an opaque color.
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | 0xff
}

/// Lookup order is the match priority.
const TABLE: [(BlockType, u32); 6] = [
    (BlockType::Empty, pack(0, 0, 0)),
    (BlockType::Terrain, pack(0, 255, 0)),
    (BlockType::PlayerSpawn, pack(255, 255, 255)),
    (BlockType::Feather, pack(255, 0, 255)),
    (BlockType::GoldCoin, pack(255, 255, 0)),
    (BlockType::Goal, pack(255, 0, 0)),
];

impl BlockType {
    pub fn color(self) -> u32 {
        TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, color)| *color)
            .unwrap_or(0xff)
    }

    /// Classify a packed color. `None` for colors outside the table.
    pub fn classify(packed: u32) -> Option<Self> {
        let opaque = packed | 0xff;
        TABLE
            .iter()
            .find(|(_, color)| *color == opaque)
            .map(|(kind, _)| *kind)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Option<Self> {
        Self::classify(pack(r, g, b))
    }

    /// RGB triple of the block's color, handy for building test images.
    pub fn rgb(self) -> [u8; 3] {
        let c = self.color();
        [(c >> 24) as u8, (c >> 16) as u8, (c >> 8) as u8]
    }
}
