// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
/// reads TOML, applies defaults (via `serde` + `Default` impls), and checks
/// the `[schedule]` values for sanity.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the effective configuration for a CLI invocation.
///
/// - An explicit `--config` path must exist and parse.
/// - Otherwise `Stepplan.toml` in the current directory is used if present.
/// - Otherwise built-in defaults apply.
pub fn load_or_default(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(p) => load_and_validate(p),
        None => {
            let fallback = default_config_path();
            if fallback.exists() {
                load_and_validate(&fallback)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Default config path: `Stepplan.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Stepplan.toml")
}
