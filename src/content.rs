// src/content.rs

//! The item shape handed to callers, whichever path produced it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::rotation::seed::RotationSeed;
use crate::types::{ContentKind, MessageCategory, RelationshipMode, TaskCadence, TaskCategory};

/// One selected task or message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// Same text on the same day gives the same id; the id changes daily.
    pub id: String,
    pub text: String,
    pub kind: ContentKind,
    pub category: ItemCategory,
    pub mode: RelationshipMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TaskDetails>,
    pub metadata: ItemMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ItemCategory {
    Task(TaskCategory),
    Message(MessageCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
}

/// Presentation attributes carried by task items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetails {
    pub description: String,
    pub points: u32,
    pub difficulty: Difficulty,
    pub estimated_time_minutes: u32,
    pub is_physical: bool,
    pub tips: String,
}

impl TaskDetails {
    /// Defaults for a task of the given cadence.
    pub fn for_cadence(cadence: TaskCadence, description: impl Into<String>, tips: impl Into<String>) -> Self {
        let (points, difficulty, minutes, physical) = match cadence {
            TaskCadence::Daily => (5, Difficulty::VeryEasy, 5, false),
            TaskCadence::Weekly => (25, Difficulty::Easy, 90, true),
        };
        Self {
            description: description.into(),
            points,
            difficulty,
            estimated_time_minutes: minutes,
            is_physical: physical,
            tips: tips.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    Ai,
    Fallback,
}

/// How an item was chosen. Informational only; nothing reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rotation_type", rename_all = "snake_case")]
pub enum ItemMetadata {
    DailyTasks {
        period_key: String,
        seed: RotationSeed,
        day_of_month: u32,
    },
    WeeklyTasks {
        period_key: String,
        seed: RotationSeed,
        week_of_year: u32,
    },
    DailyMessages {
        period_key: String,
        seed: RotationSeed,
        day_of_year: u32,
        rotation_day: u32,
        category_index: usize,
        message_index: usize,
        messages_per_category: usize,
        messages_per_day: usize,
        messages_per_month: usize,
    },
    Generated {
        source: GenerationSource,
        prompt_hash: String,
    },
}

impl ItemMetadata {
    pub fn seed(&self) -> Option<RotationSeed> {
        match self {
            ItemMetadata::DailyTasks { seed, .. }
            | ItemMetadata::WeeklyTasks { seed, .. }
            | ItemMetadata::DailyMessages { seed, .. } => Some(*seed),
            ItemMetadata::Generated { .. } => None,
        }
    }

    pub fn period_key(&self) -> Option<&str> {
        match self {
            ItemMetadata::DailyTasks { period_key, .. }
            | ItemMetadata::WeeklyTasks { period_key, .. }
            | ItemMetadata::DailyMessages { period_key, .. } => Some(period_key),
            ItemMetadata::Generated { .. } => None,
        }
    }
}

/// First `len` hex characters of the BLAKE3 digest of `input`.
pub fn short_hash(input: &str, len: usize) -> String {
    let hex = blake3::hash(input.as_bytes()).to_hex();
    hex[..len.min(hex.len())].to_string()
}

/// `"{prefix}_{hash8}"` over `"{text}_{YYYY-MM-DD}"`.
pub fn dated_item_id(prefix: &str, text: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}", short_hash(&format!("{text}_{date}"), 8))
}
