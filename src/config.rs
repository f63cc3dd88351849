use crate::generator::GeneratorSettings;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_wall_density")]
    pub wall_density: f64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed seed for reproducible levels; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct LevelsConfig {
    #[serde(default = "default_levels_path")]
    pub path: String,
    #[serde(default = "default_min_levels")]
    pub min_levels: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default values
fn default_rows() -> i32 { 7 }
fn default_cols() -> i32 { 10 }
fn default_wall_density() -> f64 { 0.42 }
fn default_max_attempts() -> u32 { 400 }
fn default_levels_path() -> String { "levels.json".to_string() }
fn default_min_levels() -> usize { 3 }
fn default_log_filter() -> String { "info".to_string() }

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            wall_density: default_wall_density(),
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            path: default_levels_path(),
            min_levels: default_min_levels(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl GeneratorConfig {
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            rows: self.rows,
            cols: self.cols,
            wall_density: self.wall_density,
            max_attempts: self.max_attempts,
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from a specific file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;
        Self::from_toml_str(&contents)
    }

    /// Load config.toml; a missing file yields the defaults
    pub fn load() -> Result<Self, String> {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Load config.toml and start env_logger with its filter.
    ///
    /// `RUST_LOG` still wins over the configured filter. An unreadable or
    /// invalid file is reported once logging is up and the defaults are used.
    pub fn load_and_init_logging() -> Self {
        let loaded = Self::load();
        let filter = loaded
            .as_ref()
            .map(|config| config.logging.filter.as_str())
            .unwrap_or("info");
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

        match loaded {
            Ok(config) => {
                if Path::new(CONFIG_PATH).exists() {
                    info!("Loaded configuration from {}", CONFIG_PATH);
                } else {
                    info!("No {} found, using default configuration", CONFIG_PATH);
                }
                config
            }
            Err(e) => {
                warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.generator.rows, 7);
        assert_eq!(config.generator.cols, 10);
        assert_eq!(config.generator.wall_density, 0.42);
        assert_eq!(config.generator.max_attempts, 400);
        assert_eq!(config.generator.seed, None);
        assert_eq!(config.levels.path, "levels.json");
        assert_eq!(config.levels.min_levels, 3);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [generator]
            rows = 9
            seed = 42

            [levels]
            min_levels = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.rows, 9);
        assert_eq!(config.generator.cols, 10);
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.levels.min_levels, 5);
        assert_eq!(config.levels.path, "levels.json");
    }

    #[test]
    fn test_generator_settings_conversion() {
        let config = Config::default();
        assert_eq!(config.generator.settings(), GeneratorSettings::hard());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("[generator\nrows = ").is_err());
        assert!(Config::from_toml_str("[generator]\nrows = \"many\"").is_err());
    }
}
