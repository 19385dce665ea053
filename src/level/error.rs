use std::fmt;

use crate::resources::assetcatalog::AssetError;

/// Why a level could not be loaded or started.
#[derive(Debug)]
pub enum LevelError {
    /// The image file could not be opened or decoded.
    Image(image::ImageError),
    /// A region or animation the level needs is absent from the asset provider.
    MissingAsset(String),
    /// The level has no player spawn pixel.
    NoSpawnPoint,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Image(e) => write!(f, "level image error: {}", e),
            LevelError::MissingAsset(key) => write!(f, "level asset '{}' not found", key),
            LevelError::NoSpawnPoint => write!(f, "level has no player spawn point"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for LevelError {
    fn from(e: image::ImageError) -> Self {
        LevelError::Image(e)
    }
}

impl From<AssetError> for LevelError {
    fn from(e: AssetError) -> Self {
        match e {
            AssetError::Missing(key) => LevelError::MissingAsset(key),
            other => LevelError::MissingAsset(other.to_string()),
        }
    }
}
