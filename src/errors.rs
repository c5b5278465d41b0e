// src/errors.rs

//! Crate-wide error types and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("malformed instruction line: {0:?}")]
    MalformedLine(String),

    #[error("step '{0}' has no cost in the configured alphabet")]
    UnknownStep(String),

    #[error("no job finishes after t={0}")]
    NoFutureCompletion(u64),

    #[error("cycle detected in step graph involving step '{0}'")]
    CyclicDependency(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StepplanError>;
