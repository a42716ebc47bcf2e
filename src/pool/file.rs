// src/pool/file.rs

//! On-disk shape of a mode's content file.
//!
//! ```toml
//! [tasks]
//! daily = ["Send a good morning text first", ...]
//! weekly = ["Cook a meal together", ...]
//!
//! [messages]
//! good_morning = ["Morning, my favorite person", ...]
//! good_night = [...]
//! love_confession = [...]
//! apology = [...]
//! funny_hinglish = [...]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{Result, RotationError};
use crate::pool::{ContentPool, ModePools, PoolKind};
use crate::types::{MessageCategory, RelationshipMode};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawModeContent {
    pub tasks: RawTaskPools,
    pub messages: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTaskPools {
    pub daily: Vec<String>,
    pub weekly: Vec<String>,
}

/// Parse and validate one mode's content file.
///
/// `origin` names the source (a path or `"embedded"`) in error messages.
pub fn parse_mode_content(mode: RelationshipMode, origin: &str, text: &str) -> Result<ModePools> {
    let raw: RawModeContent = toml::from_str(text).map_err(|e| {
        RotationError::PoolError(format!("{origin}: malformed content for {mode}: {e}"))
    })?;
    into_mode_pools(mode, raw)
}

pub fn into_mode_pools(mode: RelationshipMode, raw: RawModeContent) -> Result<ModePools> {
    let label = |kind: PoolKind| format!("{mode}/{kind}");

    let daily = ContentPool::new(label(PoolKind::DailyTasks), raw.tasks.daily)?;
    let weekly = ContentPool::new(label(PoolKind::WeeklyTasks), raw.tasks.weekly)?;

    let messages = raw
        .messages
        .into_iter()
        .map(|(key, items)| {
            let category: MessageCategory = key.parse().map_err(|e: String| {
                RotationError::PoolError(format!("{mode}: {e}"))
            })?;
            ContentPool::new(label(PoolKind::Messages(category)), items).map(|p| (category, p))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    ModePools::new(mode, daily, weekly, messages)
}
