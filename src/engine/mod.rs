// src/engine/mod.rs

//! Entry points consumed by the API layer.
//!
//! - [`RotationEngine`] is the synchronous, deterministic core: an injected
//!   [`PoolRegistry`] plus the configured counts.
//! - [`ContentService`] wraps it for async callers and adds the assisted
//!   generation path for modes the registry has no tasks for.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::RotationSection;
use crate::content::ContentItem;
use crate::errors::{Result, RotationError};
use crate::pool::{MESSAGE_POOL_LIMIT, PoolKind, PoolRegistry};
use crate::rotation;
use crate::rotation::window::check_count;
use crate::types::{ContentKind, MessageCategory, RelationshipMode};

pub mod service;

pub use service::{ContentBatch, ContentService, ContentSource};

/// Deterministic selector over an immutable pool registry.
///
/// Cheap to clone; clones share the registry.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    registry: Arc<PoolRegistry>,
    settings: RotationSection,
}

impl RotationEngine {
    /// Build an engine, checking the configured counts against every loaded
    /// pool so a bad combination fails at start-up instead of per request.
    pub fn new(registry: Arc<PoolRegistry>, settings: RotationSection) -> Result<Self> {
        for mode in registry.modes() {
            let daily = registry.pool(mode, PoolKind::DailyTasks)?;
            check_count(daily.label(), settings.daily_task_count, daily.len())?;

            let weekly = registry.pool(mode, PoolKind::WeeklyTasks)?;
            check_count(weekly.label(), settings.weekly_task_count, weekly.len())?;

            for category in MessageCategory::ALL {
                let pool = registry.pool(mode, PoolKind::Messages(category))?;
                check_count(
                    pool.label(),
                    settings.messages_per_category,
                    pool.head(MESSAGE_POOL_LIMIT).len(),
                )?;
            }
        }
        debug!(?settings, "rotation engine ready");
        Ok(Self { registry, settings })
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    pub fn settings(&self) -> RotationSection {
        self.settings
    }

    pub fn select_daily_tasks(
        &self,
        mode: RelationshipMode,
        count: usize,
        today: NaiveDate,
    ) -> Result<Vec<ContentItem>> {
        let pool = self.registry.pool(mode, PoolKind::DailyTasks)?;
        rotation::daily_tasks(mode, pool, count, today)
    }

    pub fn select_weekly_tasks(
        &self,
        mode: RelationshipMode,
        count: usize,
        today: NaiveDate,
    ) -> Result<Vec<ContentItem>> {
        let pool = self.registry.pool(mode, PoolKind::WeeklyTasks)?;
        rotation::weekly_tasks(mode, pool, count, today)
    }

    pub fn select_daily_messages(
        &self,
        mode: RelationshipMode,
        messages_per_category: usize,
        today: NaiveDate,
    ) -> Result<Vec<ContentItem>> {
        let pools = self
            .registry
            .get(mode)
            .ok_or_else(|| RotationError::NoContentForMode {
                mode: mode.to_string(),
                pool: "messages".to_string(),
            })?;
        rotation::daily_messages(mode, pools, messages_per_category, today)
    }

    /// `GetDailyContent(mode, kind, today)` with the configured counts.
    ///
    /// `mode` is parsed strictly; an unknown string is
    /// [`RotationError::UnknownMode`].
    pub fn get_daily_content(
        &self,
        mode: &str,
        kind: ContentKind,
        today: NaiveDate,
    ) -> Result<Vec<ContentItem>> {
        let mode: RelationshipMode = mode.parse()?;
        match kind {
            ContentKind::Tasks => self.select_daily_tasks(mode, self.settings.daily_task_count, today),
            ContentKind::Messages => {
                self.select_daily_messages(mode, self.settings.messages_per_category, today)
            }
        }
    }

    /// `GetWeeklyContent(mode, today)`: weekly tasks only.
    pub fn get_weekly_content(&self, mode: &str, today: NaiveDate) -> Result<Vec<ContentItem>> {
        let mode: RelationshipMode = mode.parse()?;
        self.select_weekly_tasks(mode, self.settings.weekly_task_count, today)
    }
}
