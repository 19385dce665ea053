//! Loaded GPU textures keyed by the atlas' texture names.

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::resources::assetcatalog::AssetCatalog;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload every texture the catalog lists.
    pub fn load_from_catalog(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        catalog: &AssetCatalog,
    ) -> Result<Self, String> {
        let mut store = Self::new();
        for (key, path) in catalog.textures() {
            let path_str = path
                .to_str()
                .ok_or_else(|| format!("texture path for '{}' is not valid UTF-8", key))?;
            let texture = rl
                .load_texture(thread, path_str)
                .map_err(|e| format!("failed to load texture '{}' from {}: {}", key, path_str, e))?;
            store.insert(key, texture);
        }
        info!("Loaded {} textures", store.map.len());
        Ok(store)
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}
