use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "sjavac.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, used unless `RUST_LOG` is set.
    pub log_filter: String,
    /// When set, only files with this extension are checked.
    pub source_extension: Option<String>,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            log_filter: raw_config.log_filter.unwrap_or("warn".into()),
            source_extension: raw_config
                .source_extension
                .map(|ext| ext.trim_start_matches('.').to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    log_filter: Option<String>,
    source_extension: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".into(),
            source_extension: None,
        }
    }
}

impl Config {
    pub fn accepts_path<P: AsRef<Path>>(&self, path: P) -> bool {
        let Some(expected) = &self.source_extension else {
            return true;
        };

        path.as_ref()
            .extension()
            .is_some_and(|ext| ext == expected.as_str())
    }
}

fn load_config_file<P: AsRef<Path>>(config_path: P) -> Option<Config> {
    let config_path = config_path.as_ref();
    let config_path = match config_path.is_dir() {
        true => config_path.join(CONFIG_FILE_NAME),
        false => config_path.to_path_buf(),
    };

    if !config_path.exists() {
        return None;
    };

    let config = std::fs::read_to_string(config_path).ok()?;

    convert_from_toml(&config)
}

fn convert_from_toml(config: &str) -> Option<Config> {
    let raw_config: RawConfig = toml::from_str(config).ok()?;
    Some(raw_config.into())
}

/// Loads `sjavac.toml` from a directory, or the given file directly. Falls back to the
/// defaults when nothing usable is found.
pub fn load_config<P: AsRef<Path>>(config_path: Option<P>) -> Config {
    match config_path {
        Some(config_path) => load_config_file(config_path).unwrap_or_default(),
        None => Config::default(),
    }
}
