use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RotationError;

/// How a couple lives and meets. Selects which set of content pools applies.
///
/// Only these three modes exist; anything else is rejected by `FromStr`
/// rather than mapped onto a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipMode {
    SameHome,
    #[serde(alias = "DAILY_IRL")]
    DailyInPerson,
    LongDistance,
}

impl RelationshipMode {
    pub const ALL: [RelationshipMode; 3] = [
        RelationshipMode::SameHome,
        RelationshipMode::DailyInPerson,
        RelationshipMode::LongDistance,
    ];

    /// Canonical upper-case label, also used inside period keys.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipMode::SameHome => "SAME_HOME",
            RelationshipMode::DailyInPerson => "DAILY_IN_PERSON",
            RelationshipMode::LongDistance => "LONG_DISTANCE",
        }
    }

    /// Stem of the content file holding this mode's pools.
    pub fn file_stem(self) -> &'static str {
        match self {
            RelationshipMode::SameHome => "same_home",
            RelationshipMode::DailyInPerson => "daily_in_person",
            RelationshipMode::LongDistance => "long_distance",
        }
    }

    /// Short prefix used when building item ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            RelationshipMode::SameHome => "sh",
            RelationshipMode::DailyInPerson => "dm",
            RelationshipMode::LongDistance => "ld",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RelationshipMode::SameHome => "Living together in the same home",
            RelationshipMode::DailyInPerson => {
                "Meeting daily in real life but not living together"
            }
            RelationshipMode::LongDistance => "In a long-distance relationship",
        }
    }
}

impl fmt::Display for RelationshipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipMode {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAME_HOME" => Ok(RelationshipMode::SameHome),
            "DAILY_IN_PERSON" | "DAILY_IRL" => Ok(RelationshipMode::DailyInPerson),
            "LONG_DISTANCE" => Ok(RelationshipMode::LongDistance),
            _ => Err(RotationError::UnknownMode(s.to_string())),
        }
    }
}

/// Category of a connection task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    Communication,
    ThoughtfulGesture,
    MicroActivity,
    PhysicalActivity,
}

impl TaskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskCategory::Communication => "Communication",
            TaskCategory::ThoughtfulGesture => "ThoughtfulGesture",
            TaskCategory::MicroActivity => "MicroActivity",
            TaskCategory::PhysicalActivity => "PhysicalActivity",
        }
    }
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Communication" => Ok(TaskCategory::Communication),
            "ThoughtfulGesture" => Ok(TaskCategory::ThoughtfulGesture),
            "MicroActivity" => Ok(TaskCategory::MicroActivity),
            "PhysicalActivity" => Ok(TaskCategory::PhysicalActivity),
            other => Err(format!("invalid task category: {other}")),
        }
    }
}

/// Category of a romantic message.
///
/// The declaration order is significant: a category's position in [`ALL`]
/// is its `category_index`, which offsets its daily window.
///
/// [`ALL`]: MessageCategory::ALL
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    GoodMorning,
    GoodNight,
    LoveConfession,
    Apology,
    FunnyHinglish,
}

impl MessageCategory {
    pub const ALL: [MessageCategory; 5] = [
        MessageCategory::GoodMorning,
        MessageCategory::GoodNight,
        MessageCategory::LoveConfession,
        MessageCategory::Apology,
        MessageCategory::FunnyHinglish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageCategory::GoodMorning => "good_morning",
            MessageCategory::GoodNight => "good_night",
            MessageCategory::LoveConfession => "love_confession",
            MessageCategory::Apology => "apology",
            MessageCategory::FunnyHinglish => "funny_hinglish",
        }
    }

    /// Position in the fixed category order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("invalid message category: {s}"))
    }
}

/// What the caller is asking for in `GetDailyContent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Tasks,
    Messages,
}

/// Daily or weekly task cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCadence {
    Daily,
    Weekly,
}

impl TaskCadence {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskCadence::Daily => "daily",
            TaskCadence::Weekly => "weekly",
        }
    }
}
