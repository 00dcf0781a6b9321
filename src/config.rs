use crate::grid::Grid;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    /// Row strings; the built-in layout is used when absent
    #[serde(default)]
    pub layout: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_turn_speed_degrees")]
    pub turn_speed_degrees: f32,
    #[serde(default = "default_player_radius")]
    pub radius: f32,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,
    /// Screen pixels per ray
    #[serde(default = "default_strip_width")]
    pub strip_width: f32,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_minimap_scale")]
    pub minimap_scale: f32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_input_log: bool,
    #[serde(default = "default_input_log_path")]
    pub input_log_path: String,
}

// Default values
fn default_tile_size() -> f32 { 32.0 }
fn default_move_speed() -> f32 { 2.0 }
fn default_turn_speed_degrees() -> f32 { 4.0 }
fn default_player_radius() -> f32 { 5.0 }
fn default_fov_degrees() -> f32 { 60.0 }
fn default_strip_width() -> f32 { 1.0 }
fn default_window_title() -> String { "Gridcaster".to_string() }
fn default_minimap_scale() -> f32 { 0.2 }
fn default_input_log_path() -> String { "input_log.json".to_string() }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            layout: None,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            turn_speed_degrees: default_turn_speed_degrees(),
            radius: default_player_radius(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: default_fov_degrees(),
            strip_width: default_strip_width(),
            parallel: false,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            minimap_scale: default_minimap_scale(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_input_log: false,
            input_log_path: default_input_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::read_file() {
            Ok(Some(config)) => {
                println!("Loaded configuration from config.toml");
                config
            }
            Ok(None) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse config.toml: {}", e);
                eprintln!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Read `config.toml` without logging; `None` when the file is missing
    pub fn read_file() -> Result<Option<Self>, toml::de::Error> {
        match fs::read_to_string("config.toml") {
            Ok(contents) => Self::from_toml_str(&contents).map(Some),
            Err(_) => Ok(None),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Build the map from the configured layout, or the built-in one
    pub fn build_grid(&self) -> Result<Grid, String> {
        match &self.map.layout {
            Some(rows) => Grid::from_rows(rows, self.map.tile_size),
            None => Grid::from_rows(&crate::grid::DEFAULT_LAYOUT, self.map.tile_size),
        }
    }

    pub fn fov(&self) -> f32 {
        self.camera.fov_degrees.to_radians()
    }

    /// The field of view must lie strictly between 0 and 180 degrees
    pub fn validate_fov(&self) -> Result<(), String> {
        let fov = self.camera.fov_degrees;
        if fov > 0.0 && fov < 180.0 {
            Ok(())
        } else {
            Err(format!("field of view must be between 0 and 180 degrees, got {}", fov))
        }
    }

    pub fn turn_speed(&self) -> f32 {
        self.player.turn_speed_degrees.to_radians()
    }

    /// Number of rays per frame: screen width divided by strip width, at least one
    pub fn ray_count(&self, grid: &Grid) -> usize {
        crate::raycast::ray_count_for(grid.world_width(), self.camera.strip_width)
    }
}
