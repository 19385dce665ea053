//! Asset lookup by logical key.
//!
//! Game objects never touch textures directly. They resolve
//! [`TextureRegion`]s and [`AnimationClip`]s by key through the
//! [`AssetProvider`] trait when they are built, and hand those regions to a
//! [`Surface`](crate::render::surface::Surface) when drawn.
//!
//! The concrete provider, [`AssetCatalog`], is read from a JSON atlas
//! description:
//!
//! ```json
//! {
//!   "textures": { "atlas": "images/canyonrun.png" },
//!   "regions": {
//!     "rock_edge": { "texture": "atlas", "x": 0, "y": 0, "width": 32, "height": 128 }
//!   },
//!   "animations": {
//!     "anim_gold_coin": {
//!       "frames": ["gold_coin_01", "gold_coin_02"],
//!       "frame_duration": 0.05,
//!       "play_mode": "loop_ping_pong"
//!     }
//!   }
//! }
//! ```
//!
//! Texture paths are relative to the directory holding the atlas file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::animationstore::{AnimationClip, PlayMode};

/// Rectangle of a texture, addressed by the texture's key.
#[derive(Debug, Clone)]
pub struct TextureRegion {
    /// Key in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub texture: Arc<str>,
    /// Source rectangle in texture pixels.
    pub source: Rectangle,
}

impl PartialEq for TextureRegion {
    fn eq(&self, other: &Self) -> bool {
        self.texture == other.texture
            && self.source.x == other.source.x
            && self.source.y == other.source.y
            && self.source.width == other.source.width
            && self.source.height == other.source.height
    }
}

impl TextureRegion {
    pub fn new(texture: &str, source: Rectangle) -> Self {
        Self {
            texture: Arc::from(texture),
            source,
        }
    }
}

/// Read-only asset lookup consumed by the level decoder and the renderer.
pub trait AssetProvider {
    fn region(&self, key: &str) -> Option<TextureRegion>;
    fn animation(&self, key: &str) -> Option<Arc<AnimationClip>>;
}

/// Failure to read or resolve assets.
#[derive(Debug)]
pub enum AssetError {
    /// The atlas file could not be read.
    Io(PathBuf, std::io::Error),
    /// The atlas description is not valid JSON for the expected layout.
    Parse(String),
    /// A region or animation key is absent.
    Missing(String),
    /// A region or animation points at something that does not exist.
    Dangling { key: String, target: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(path, e) => write!(f, "cannot read atlas {}: {}", path.display(), e),
            AssetError::Parse(msg) => write!(f, "invalid atlas description: {}", msg),
            AssetError::Missing(key) => write!(f, "asset '{}' not found", key),
            AssetError::Dangling { key, target } => {
                write!(f, "asset '{}' refers to unknown '{}'", key, target)
            }
        }
    }
}

impl std::error::Error for AssetError {}

#[derive(Debug, Deserialize, Serialize)]
struct RegionDef {
    texture: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Debug, Deserialize, Serialize)]
struct AnimationDef {
    frames: Vec<String>,
    frame_duration: f32,
    #[serde(default)]
    play_mode: PlayMode,
}

#[derive(Debug, Deserialize, Serialize)]
struct AtlasFile {
    #[serde(default)]
    textures: FxHashMap<String, String>,
    #[serde(default)]
    regions: FxHashMap<String, RegionDef>,
    #[serde(default)]
    animations: FxHashMap<String, AnimationDef>,
}

/// Registry of texture files, regions and animation clips.
#[derive(Resource, Debug, Default, Clone)]
pub struct AssetCatalog {
    textures: FxHashMap<String, PathBuf>,
    regions: FxHashMap<String, TextureRegion>,
    animations: FxHashMap<String, Arc<AnimationClip>>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and resolve an atlas description from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let catalog = Self::from_json_str(&json, base)?;
        info!(
            "Loaded atlas {:?}: {} textures, {} regions, {} animations",
            path,
            catalog.textures.len(),
            catalog.regions.len(),
            catalog.animations.len()
        );
        Ok(catalog)
    }

    /// Resolve an atlas description. Texture paths are joined onto `base_dir`.
    pub fn from_json_str(json: &str, base_dir: &Path) -> Result<Self, AssetError> {
        let file: AtlasFile =
            serde_json::from_str(json).map_err(|e| AssetError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for (key, path) in file.textures {
            catalog.add_texture(key, base_dir.join(path));
        }
        for (key, def) in file.regions {
            if !catalog.textures.contains_key(&def.texture) {
                return Err(AssetError::Dangling {
                    key,
                    target: def.texture,
                });
            }
            let source = Rectangle::new(def.x, def.y, def.width, def.height);
            catalog.add_region(key, TextureRegion::new(&def.texture, source));
        }
        for (key, def) in file.animations {
            let mut frames = Vec::with_capacity(def.frames.len());
            for frame in &def.frames {
                match catalog.regions.get(frame) {
                    Some(region) => frames.push(region.clone()),
                    None => {
                        return Err(AssetError::Dangling {
                            key,
                            target: frame.clone(),
                        });
                    }
                }
            }
            debug!("Animation '{}' with {} frames", key, frames.len());
            catalog.add_animation(
                key,
                AnimationClip::new(frames, def.frame_duration, def.play_mode),
            );
        }
        Ok(catalog)
    }

    pub fn add_texture(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        self.textures.insert(key.into(), path.into());
    }

    pub fn add_region(&mut self, key: impl Into<String>, region: TextureRegion) {
        self.regions.insert(key.into(), region);
    }

    pub fn add_animation(&mut self, key: impl Into<String>, clip: AnimationClip) {
        self.animations.insert(key.into(), Arc::new(clip));
    }

    pub fn remove_region(&mut self, key: &str) -> Option<TextureRegion> {
        self.regions.remove(key)
    }

    /// Texture keys and the files backing them.
    pub fn textures(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.textures
            .iter()
            .map(|(key, path)| (key.as_str(), path.as_path()))
    }
}

impl AssetProvider for AssetCatalog {
    fn region(&self, key: &str) -> Option<TextureRegion> {
        self.regions.get(key).cloned()
    }

    fn animation(&self, key: &str) -> Option<Arc<AnimationClip>> {
        self.animations.get(key).cloned()
    }
}

/// Region lookup that fails with [`AssetError::Missing`].
pub fn require_region(assets: &dyn AssetProvider, key: &str) -> Result<TextureRegion, AssetError> {
    assets
        .region(key)
        .ok_or_else(|| AssetError::Missing(key.to_string()))
}

/// Animation lookup that fails with [`AssetError::Missing`].
pub fn require_animation(
    assets: &dyn AssetProvider,
    key: &str,
) -> Result<Arc<AnimationClip>, AssetError> {
    assets
        .animation(key)
        .ok_or_else(|| AssetError::Missing(key.to_string()))
}
