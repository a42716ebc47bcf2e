// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from `Rotation.toml`.
///
/// ```toml
/// [rotation]
/// daily_task_count = 3
/// weekly_task_count = 1
/// messages_per_category = 3
///
/// [content]
/// dir = "content"
///
/// [assist]
/// enabled = true
/// command = "my-llm --max-tokens $POOKIE_MAX_TOKENS"
/// timeout = "10s"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub rotation: RotationSection,

    #[serde(default)]
    pub content: ContentSection,

    #[serde(default)]
    pub assist: RawAssistSection,
}

/// `[rotation]` section: how many items each selector returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationSection {
    #[serde(default = "default_daily_task_count")]
    pub daily_task_count: usize,

    #[serde(default = "default_weekly_task_count")]
    pub weekly_task_count: usize,

    #[serde(default = "default_messages_per_category")]
    pub messages_per_category: usize,
}

fn default_daily_task_count() -> usize {
    3
}

fn default_weekly_task_count() -> usize {
    1
}

fn default_messages_per_category() -> usize {
    3
}

impl Default for RotationSection {
    fn default() -> Self {
        Self {
            daily_task_count: default_daily_task_count(),
            weekly_task_count: default_weekly_task_count(),
            messages_per_category: default_messages_per_category(),
        }
    }
}

/// `[content]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
    /// Directory holding `<mode>.toml` pool files. When `None`, the pools
    /// compiled into the binary are used.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// `[assist]` section as written in TOML (timeout still a string).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAssistSection {
    #[serde(default)]
    pub enabled: bool,

    /// Shell command: receives the prompt on stdin, prints text on stdout.
    #[serde(default)]
    pub command: Option<String>,

    /// Duration string such as `"800ms"`, `"10s"` or `"1m"`.
    #[serde(default = "default_timeout")]
    pub timeout: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_timeout() -> String {
    "10s".to_string()
}

fn default_max_tokens() -> u32 {
    600
}

impl Default for RawAssistSection {
    fn default() -> Self {
        Self {
            enabled: false,
            command: None,
            timeout: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Validated assisted-generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistSettings {
    pub command: String,
    pub timeout: Duration,
    pub max_tokens: u32,
}

/// Validated configuration. Only constructible through
/// `TryFrom<RawConfigFile>` (see `validate.rs`) or [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub rotation: RotationSection,
    pub content: ContentSection,
    /// `None` when assisted generation is disabled.
    pub assist: Option<AssistSettings>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        rotation: RotationSection,
        content: ContentSection,
        assist: Option<AssistSettings>,
    ) -> Self {
        Self {
            rotation,
            content,
            assist,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RotationSection::default(), ContentSection::default(), None)
    }
}
