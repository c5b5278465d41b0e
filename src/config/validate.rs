// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::ConfigFile;
use crate::errors::{Result, StepplanError};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `workers >= 1`
/// - the cost alphabet is non-empty
/// - the cost alphabet has no repeated symbols
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_workers(cfg)?;
    validate_alphabet(cfg)?;
    Ok(())
}

fn validate_workers(cfg: &ConfigFile) -> Result<()> {
    if cfg.schedule.workers == 0 {
        return Err(StepplanError::ConfigError(
            "[schedule].workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_alphabet(cfg: &ConfigFile) -> Result<()> {
    let alphabet = &cfg.schedule.alphabet;

    if alphabet.is_empty() {
        return Err(StepplanError::ConfigError(
            "[schedule].alphabet must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for sym in alphabet.chars() {
        if !seen.insert(sym) {
            return Err(StepplanError::ConfigError(format!(
                "[schedule].alphabet contains '{sym}' more than once"
            )));
        }
    }

    Ok(())
}
