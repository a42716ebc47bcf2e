// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RotationError};
use crate::fs::FileSystem;

/// Parse config TOML into a `RawConfigFile` without semantic validation.
pub fn parse_raw(contents: &str) -> Result<RawConfigFile> {
    let config: RawConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Read and parse a config file; no semantic validation.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs
        .read_to_string(path)
        .map_err(|e| RotationError::ConfigError(format!("{e:#}")))?;
    parse_raw(&contents)
}

/// Load a configuration file and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks counts, the assist command and the timeout string.
///
/// A relative `[content].dir` is resolved against the config file's
/// directory.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let raw = load_from_path(fs, path)?;
    let mut config = ConfigFile::try_from(raw)?;

    if let Some(dir) = config.content.dir.take() {
        config.content.dir = Some(resolve_relative(path, dir));
    }

    info!(config = ?path, "loaded configuration");
    Ok(config)
}

/// Load the config at `path` if given; otherwise load the default path when
/// it exists, falling back to built-in defaults.
///
/// An explicitly requested file that does not exist is an error.
pub fn load_or_default(fs: &dyn FileSystem, path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(p) => load_and_validate(fs, p),
        None => {
            let default = default_config_path();
            if fs.is_file(&default) {
                load_and_validate(fs, &default)
            } else {
                debug!(path = ?default, "no config file; using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// `Rotation.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Rotation.toml")
}

fn resolve_relative(config_path: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir),
        _ => dir,
    }
}
