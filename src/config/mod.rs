// src/config/mod.rs

//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the [`FileSystem`](crate::fs::FileSystem) seam (`loader.rs`).
//! - Validate counts and assisted-generation settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{
    AssistSettings, ConfigFile, ContentSection, RawAssistSection, RawConfigFile, RotationSection,
};
pub use validate::parse_duration;
