use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::pluck::PATH_SEPARATOR;
use crate::error::{Error, Result};

pub const CONFIG_ENV_VAR: &str = "LODEX_CONFIG";
pub const CONFIG_FILE_NAME: &str = "lodex.json";

/// Root configuration structure for lodex.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LodexConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via lodex.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_path_separator")]
    pub path_separator: char,

    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,

    #[serde(default = "default_uuid_count")]
    pub uuid_count: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            path_separator: default_path_separator(),
            pretty_output: default_pretty_output(),
            uuid_count: default_uuid_count(),
        }
    }
}

fn default_path_separator() -> char {
    PATH_SEPARATOR
}

fn default_pretty_output() -> bool {
    true
}

fn default_uuid_count() -> usize {
    1
}

// =============================================================================
// Loading functions
// =============================================================================

/// Resolve the config path: explicit path, then $LODEX_CONFIG, then ./lodex.json.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Load the config, falling back to built-in defaults when the file is
/// missing or invalid.
pub fn load_config(explicit: Option<&Path>) -> LodexConfig {
    let path = config_path(explicit);
    if !path.exists() {
        return LodexConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            crate::log_status!(
                "config",
                "Ignoring {}: {} ({})",
                path.display(),
                err,
                err.details
            );
            LodexConfig::default()
        }
    }
}

/// Load and validate config from `path`.
pub fn load_config_from(path: &Path) -> Result<LodexConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: LodexConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &LodexConfig) -> Result<()> {
    if config.defaults.uuid_count == 0 {
        return Err(Error::config_invalid_value(
            "defaults.uuidCount",
            Some("0".to_string()),
            "must be at least 1",
        ));
    }

    if config.defaults.path_separator.is_whitespace() {
        return Err(Error::config_invalid_value(
            "defaults.pathSeparator",
            Some(format!("{:?}", config.defaults.path_separator)),
            "must not be whitespace",
        ));
    }

    Ok(())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
