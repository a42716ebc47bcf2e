// src/engine/service.rs

//! Async façade used by the API layer.
//!
//! Routing, per request:
//! - unknown mode string: `UnknownMode`, nothing else is consulted;
//! - mode present in the registry: deterministic rotation;
//! - tasks for a mode the registry lacks: assisted generation, falling back
//!   to static defaults (never empty);
//! - messages for a mode the registry lacks: `NoContentForMode`.
//!
//! Deterministic errors (oversized counts, malformed pools) are returned
//! as-is; only the assisted path has a fallback.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::assist::{Assistant, GenerationOutcome, PartnerProfile};
use crate::content::ContentItem;
use crate::engine::RotationEngine;
use crate::errors::{Result, RotationError};
use crate::types::{ContentKind, RelationshipMode, TaskCadence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSource {
    Rotation,
    Generated,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBatch {
    pub mode: RelationshipMode,
    pub kind: ContentKind,
    pub date: NaiveDate,
    pub source: ContentSource,
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Clone)]
pub struct ContentService {
    engine: RotationEngine,
    assistant: Assistant,
}

impl ContentService {
    pub fn new(engine: RotationEngine, assistant: Assistant) -> Self {
        Self { engine, assistant }
    }

    pub fn engine(&self) -> &RotationEngine {
        &self.engine
    }

    pub async fn daily_content(
        &self,
        mode: &str,
        kind: ContentKind,
        today: NaiveDate,
        profile: Option<&PartnerProfile>,
    ) -> Result<ContentBatch> {
        let mode: RelationshipMode = mode.parse()?;
        let settings = self.engine.settings();

        if self.engine.registry().contains(mode) {
            let items = match kind {
                ContentKind::Tasks => {
                    self.engine
                        .select_daily_tasks(mode, settings.daily_task_count, today)?
                }
                ContentKind::Messages => {
                    self.engine
                        .select_daily_messages(mode, settings.messages_per_category, today)?
                }
            };
            return Ok(rotation_batch(mode, kind, today, items));
        }

        match kind {
            ContentKind::Tasks => {
                debug!(%mode, assist = self.assistant.is_enabled(), "no task pool; asking assistant");
                let outcome = self
                    .assistant
                    .generate_tasks(mode, TaskCadence::Daily, settings.daily_task_count, profile, today)
                    .await;
                Ok(assisted_batch(mode, today, outcome))
            }
            ContentKind::Messages => Err(RotationError::NoContentForMode {
                mode: mode.to_string(),
                pool: "messages".to_string(),
            }),
        }
    }

    pub async fn weekly_content(
        &self,
        mode: &str,
        today: NaiveDate,
        profile: Option<&PartnerProfile>,
    ) -> Result<ContentBatch> {
        let mode: RelationshipMode = mode.parse()?;
        let count = self.engine.settings().weekly_task_count;

        if self.engine.registry().contains(mode) {
            let items = self.engine.select_weekly_tasks(mode, count, today)?;
            return Ok(rotation_batch(mode, ContentKind::Tasks, today, items));
        }

        debug!(%mode, assist = self.assistant.is_enabled(), "no task pool; asking assistant");
        let outcome = self
            .assistant
            .generate_tasks(mode, TaskCadence::Weekly, count, profile, today)
            .await;
        Ok(assisted_batch(mode, today, outcome))
    }
}

fn rotation_batch(
    mode: RelationshipMode,
    kind: ContentKind,
    date: NaiveDate,
    items: Vec<ContentItem>,
) -> ContentBatch {
    debug!(%mode, ?kind, count = items.len(), "serving rotated content");
    ContentBatch {
        mode,
        kind,
        date,
        source: ContentSource::Rotation,
        items,
    }
}

fn assisted_batch(mode: RelationshipMode, date: NaiveDate, outcome: GenerationOutcome) -> ContentBatch {
    let source = match outcome.failure() {
        None => ContentSource::Generated,
        Some(reason) => ContentSource::Fallback {
            reason: reason.to_string(),
        },
    };
    ContentBatch {
        mode,
        kind: ContentKind::Tasks,
        date,
        source,
        items: outcome.into_items(),
    }
}
