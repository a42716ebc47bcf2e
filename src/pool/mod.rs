// src/pool/mod.rs

//! Static content pools and the registry that owns them.
//!
//! A [`ContentPool`] is an ordered, immutable list of task or message texts
//! for one (mode, category) pair. The [`PoolRegistry`] is built once at
//! startup, validated eagerly, and then shared read-only (typically behind an
//! `Arc`) by every selector.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::errors::{Result, RotationError};
use crate::types::{MessageCategory, RelationshipMode};

pub mod file;
pub mod registry;

pub use registry::PoolRegistry;

/// Message pools are consulted up to this many entries per category.
pub const MESSAGE_POOL_LIMIT: usize = 90;

/// Which pool of a mode is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    DailyTasks,
    WeeklyTasks,
    Messages(MessageCategory),
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::DailyTasks => f.write_str("daily_tasks"),
            PoolKind::WeeklyTasks => f.write_str("weekly_tasks"),
            PoolKind::Messages(category) => write!(f, "messages/{category}"),
        }
    }
}

/// Ordered, immutable sequence of content strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPool {
    label: String,
    items: Vec<String>,
}

impl ContentPool {
    /// Build a pool, rejecting empty pools, blank entries and duplicates.
    ///
    /// `label` is only used in error messages and logs.
    pub fn new(label: impl Into<String>, items: Vec<String>) -> Result<Self> {
        let label = label.into();
        if items.is_empty() {
            return Err(RotationError::PoolError(format!("pool '{label}' is empty")));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                return Err(RotationError::PoolError(format!(
                    "pool '{label}' has a blank entry at position {idx}"
                )));
            }
            if !seen.insert(item.as_str()) {
                return Err(RotationError::PoolError(format!(
                    "pool '{label}' repeats entry {item:?} at position {idx}"
                )));
            }
        }

        Ok(Self { label, items })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The leading slice used for selection, at most `limit` entries.
    pub fn head(&self, limit: usize) -> &[String] {
        &self.items[..self.items.len().min(limit)]
    }
}

/// Every pool belonging to one relationship mode.
#[derive(Debug, Clone)]
pub struct ModePools {
    pub daily_tasks: ContentPool,
    pub weekly_tasks: ContentPool,
    /// Contains every [`MessageCategory`]; enforced at construction.
    messages: BTreeMap<MessageCategory, ContentPool>,
}

impl ModePools {
    pub fn new(
        mode: RelationshipMode,
        daily_tasks: ContentPool,
        weekly_tasks: ContentPool,
        messages: BTreeMap<MessageCategory, ContentPool>,
    ) -> Result<Self> {
        if let Some(missing) = MessageCategory::ALL
            .iter()
            .find(|c| !messages.contains_key(c))
        {
            return Err(RotationError::PoolError(format!(
                "mode {mode} has no '{missing}' message pool"
            )));
        }
        Ok(Self {
            daily_tasks,
            weekly_tasks,
            messages,
        })
    }

    pub fn pool(&self, kind: PoolKind) -> &ContentPool {
        match kind {
            PoolKind::DailyTasks => &self.daily_tasks,
            PoolKind::WeeklyTasks => &self.weekly_tasks,
            // Every category is present (checked in `new`).
            PoolKind::Messages(category) => &self.messages[&category],
        }
    }

    pub fn message_pool(&self, category: MessageCategory) -> &ContentPool {
        self.pool(PoolKind::Messages(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = ContentPool::new("x", Vec::new()).unwrap_err();
        assert!(matches!(err, RotationError::PoolError(msg) if msg.contains("empty")));
    }

    #[test]
    fn duplicate_entry_is_rejected() {
        let err = ContentPool::new("x", strings(&["a", "b", "a"])).unwrap_err();
        assert!(matches!(err, RotationError::PoolError(msg) if msg.contains("position 2")));
    }

    #[test]
    fn blank_entry_is_rejected() {
        assert!(ContentPool::new("x", strings(&["a", "  "])).is_err());
    }

    #[test]
    fn head_is_capped_by_pool_length() {
        let pool = ContentPool::new("x", strings(&["a", "b", "c"])).unwrap();
        assert_eq!(pool.head(2), &strings(&["a", "b"])[..]);
        assert_eq!(pool.head(90).len(), 3);
    }

    #[test]
    fn mode_pools_require_every_message_category() {
        let pool = || ContentPool::new("x", strings(&["a"])).unwrap();
        let mut messages = BTreeMap::new();
        messages.insert(MessageCategory::GoodMorning, pool());

        let err = ModePools::new(RelationshipMode::SameHome, pool(), pool(), messages).unwrap_err();
        assert!(matches!(err, RotationError::PoolError(msg) if msg.contains("good_night")));
    }
}
