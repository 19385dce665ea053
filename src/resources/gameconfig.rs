//! Game configuration resource.
//!
//! Settings are read from an INI file. Anything missing or unreadable keeps
//! its default, so the game always starts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! target_fps = 60
//! vsync = true
//!
//! [preferences]
//! show_fps_counter = true
//! use_monochrome_shader = false
//!
//! [game]
//! level = assets/levels/level-01.png
//! atlas = assets/atlas.json
//! seed = 1234
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SHOW_FPS: bool = false;
const DEFAULT_MONOCHROME: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_LEVEL_PATH: &str = "assets/levels/level-01.png";
const DEFAULT_ATLAS_PATH: &str = "assets/atlas.json";

/// Display preferences the renderer consults every frame.
pub trait PreferencesProvider {
    fn show_fps_counter(&self) -> bool;
    fn use_monochrome_shader(&self) -> bool;
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    pub show_fps_counter: bool,
    /// Draw the world in grayscale.
    pub use_monochrome_shader: bool,
    /// Level image to play.
    pub level_path: PathBuf,
    /// Atlas description listing textures, regions and animations.
    pub atlas_path: PathBuf,
    /// Fixed random seed for level decoration and rewards. Random when unset.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            show_fps_counter: DEFAULT_SHOW_FPS,
            use_monochrome_shader: DEFAULT_MONOCHROME,
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            atlas_path: PathBuf::from(DEFAULT_ATLAS_PATH),
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [preferences] section
        if let Some(show) = config
            .getbool("preferences", "show_fps_counter")
            .ok()
            .flatten()
        {
            self.show_fps_counter = show;
        }
        if let Some(mono) = config
            .getbool("preferences", "use_monochrome_shader")
            .ok()
            .flatten()
        {
            self.use_monochrome_shader = mono;
        }

        // [game] section
        if let Some(level) = config.get("game", "level") {
            self.level_path = PathBuf::from(level);
        }
        if let Some(atlas) = config.get("game", "atlas") {
            self.atlas_path = PathBuf::from(atlas);
        }
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, show_fps={}, monochrome={}, level={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.show_fps_counter,
            self.use_monochrome_shader,
            self.level_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set(
            "preferences",
            "show_fps_counter",
            Some(self.show_fps_counter.to_string()),
        );
        config.set(
            "preferences",
            "use_monochrome_shader",
            Some(self.use_monochrome_shader.to_string()),
        );

        config.set("game", "level", Some(self.level_path.display().to_string()));
        config.set("game", "atlas", Some(self.atlas_path.display().to_string()));
        if let Some(seed) = self.seed {
            config.set("game", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

impl PreferencesProvider for GameConfig {
    fn show_fps_counter(&self) -> bool {
        self.show_fps_counter
    }

    fn use_monochrome_shader(&self) -> bool {
        self.use_monochrome_shader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/canyonrun/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 480));
        assert!(!config.show_fps_counter());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 1024;
        saved.show_fps_counter = true;
        saved.use_monochrome_shader = true;
        saved.level_path = PathBuf::from("levels/other.png");
        saved.seed = Some(99);
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 1024);
        assert_eq!(loaded.window_height, 480);
        assert!(loaded.show_fps_counter());
        assert!(loaded.use_monochrome_shader());
        assert_eq!(loaded.level_path, PathBuf::from("levels/other.png"));
        assert_eq!(loaded.seed, Some(99));
    }

    #[test]
    fn test_partial_file_only_overrides_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[preferences]\nshow_fps_counter = true\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert!(config.show_fps_counter());
        assert!(!config.use_monochrome_shader());
        assert_eq!(config.target_fps, 60);
    }
}
