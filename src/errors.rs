// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unknown relationship mode: {0}")]
    UnknownMode(String),

    #[error("No content for mode {mode} ({pool})")]
    NoContentForMode { mode: String, pool: String },

    #[error("Requested {requested} items from pool '{pool}' which only holds {pool_size}")]
    CountExceedsPool {
        pool: String,
        requested: usize,
        pool_size: usize,
    },

    #[error("Requested zero items from pool '{pool}'")]
    EmptySelection { pool: String },

    #[error("Content pool error: {0}")]
    PoolError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RotationError>;
