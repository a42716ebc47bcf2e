// src/config/validate.rs

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::config::model::{AssistSettings, ConfigFile, RawAssistSection, RawConfigFile};
use crate::errors::{Result, RotationError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RotationError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_rotation_counts(&raw)?;
        let assist = validate_assist(&raw.assist)?;
        Ok(ConfigFile::new_unchecked(raw.rotation, raw.content, assist))
    }
}

fn validate_rotation_counts(cfg: &RawConfigFile) -> Result<()> {
    let counts = [
        ("daily_task_count", cfg.rotation.daily_task_count),
        ("weekly_task_count", cfg.rotation.weekly_task_count),
        ("messages_per_category", cfg.rotation.messages_per_category),
    ];
    for (name, value) in counts {
        if value == 0 {
            return Err(RotationError::ConfigError(format!(
                "[rotation].{name} must be >= 1 (got 0)"
            )));
        }
    }
    Ok(())
}

fn validate_assist(raw: &RawAssistSection) -> Result<Option<AssistSettings>> {
    let timeout = parse_duration(&raw.timeout).ok_or_else(|| {
        RotationError::ConfigError(format!(
            "[assist].timeout must look like \"800ms\", \"10s\" or \"1m\" (got {:?})",
            raw.timeout
        ))
    })?;
    if timeout.is_zero() {
        return Err(RotationError::ConfigError(
            "[assist].timeout must be greater than zero".to_string(),
        ));
    }
    if raw.max_tokens == 0 {
        return Err(RotationError::ConfigError(
            "[assist].max_tokens must be >= 1 (got 0)".to_string(),
        ));
    }

    if !raw.enabled {
        return Ok(None);
    }

    let command = raw
        .command
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            RotationError::ConfigError(
                "[assist].enabled = true requires a non-empty `command`".to_string(),
            )
        })?;

    Ok(Some(AssistSettings {
        command: command.to_string(),
        timeout,
        max_tokens: raw.max_tokens,
    }))
}

/// Parse `"<n>ms"`, `"<n>s"` or `"<n>m"` into a `Duration`.
pub fn parse_duration(s: &str) -> Option<Duration> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d+)\s*(ms|s|m)\s*$").expect("duration pattern is valid")
    });

    let caps = re.captures(s)?;
    let value: u64 = caps[1].parse().ok()?;
    match &caps[2] {
        "ms" => Some(Duration::from_millis(value)),
        "s" => Some(Duration::from_secs(value)),
        "m" => value.checked_mul(60).map(Duration::from_secs),
        _ => None,
    }
}
