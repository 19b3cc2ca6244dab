//! Loading, caching and saving the configuration file.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::types::AppConfig;
use crate::error::ConfigError;

/// Global config instance.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("radix-calc"))
}

/// The config file used when no path is given.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Use `path` if given, else the default config file.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str(&content).map_err(ConfigError::ParseFailed)
}

/// Load the config file.
///
/// Returns `None` if the file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
fn load_app_config(path: Option<&Path>) -> Option<AppConfig> {
    let config_path = match resolve_config_path(path) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            return None;
        }
    };

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, config_path);
            None
        }
    }
}

/// Initialize config from file (call once at startup).
///
/// Later calls return the config loaded by the first one. Validation
/// warnings are logged.
pub fn init_config(path: Option<&Path>) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let loaded = load_app_config(path).unwrap_or_default();

        for warning in super::validation::validate_config(&loaded) {
            tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
        }

        loaded
    })
}

/// Write `config` to `path`, creating the parent directory.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(ConfigError::SaveFailed)?;
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeFailed)?;
    std::fs::write(path, content).map_err(ConfigError::SaveFailed)?;
    tracing::debug!("Saved config to {:?}", path);
    Ok(())
}
