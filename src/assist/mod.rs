// src/assist/mod.rs

//! Best-effort assisted task generation.
//!
//! Used only for modes the registry has no task pools for. The contract is
//! simple: ask a [`TextGenerator`] for text within a timeout, parse it into
//! [`ContentItem`]s, and on *any* failure return the static defaults from
//! [`fallback`]. The outcome is a typed [`GenerationOutcome`], never an
//! error, so deterministic-path errors can't be swallowed by this fallback.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AssistSettings;
use crate::content::{
    ContentItem, GenerationSource, ItemCategory, ItemMetadata, TaskDetails, dated_item_id,
    short_hash,
};
use crate::types::{ContentKind, RelationshipMode, TaskCadence, TaskCategory};

pub mod command;
pub mod fallback;
pub mod parse;
pub mod prompt;

pub use command::CommandGenerator;
pub use prompt::PartnerProfile;

/// External text-generation capability: given a prompt, return text or fail.
///
/// Production uses [`CommandGenerator`]; tests provide scripted fakes.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_tokens: u32,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}

/// Why generated content was replaced by the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("no text generator configured")]
    Unavailable,

    #[error("generator timed out after {0:?}")]
    Timeout(Duration),

    #[error("generator failed: {0}")]
    Backend(String),

    #[error("response could not be parsed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(Vec<ContentItem>),
    Fallback {
        items: Vec<ContentItem>,
        reason: GenerationFailure,
    },
}

impl GenerationOutcome {
    pub fn items(&self) -> &[ContentItem] {
        match self {
            GenerationOutcome::Generated(items) => items,
            GenerationOutcome::Fallback { items, .. } => items,
        }
    }

    pub fn into_items(self) -> Vec<ContentItem> {
        match self {
            GenerationOutcome::Generated(items) => items,
            GenerationOutcome::Fallback { items, .. } => items,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            GenerationOutcome::Generated(_) => None,
            GenerationOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Wraps an optional generator with a timeout and the fallback table.
#[derive(Clone)]
pub struct Assistant {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
    max_tokens: u32,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("has_generator", &self.generator.is_some())
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Assistant {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration, max_tokens: u32) -> Self {
        Self {
            generator: Some(generator),
            timeout,
            max_tokens,
        }
    }

    /// An assistant that always serves the static defaults.
    pub fn disabled() -> Self {
        Self {
            generator: None,
            timeout: Duration::ZERO,
            max_tokens: 0,
        }
    }

    pub fn from_settings(settings: Option<&AssistSettings>) -> Self {
        match settings {
            Some(s) => Self::new(
                Arc::new(CommandGenerator::new(s.command.clone())),
                s.timeout,
                s.max_tokens,
            ),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate_tasks(
        &self,
        mode: RelationshipMode,
        cadence: TaskCadence,
        count: usize,
        profile: Option<&PartnerProfile>,
        today: NaiveDate,
    ) -> GenerationOutcome {
        let Some(generator) = &self.generator else {
            return fallback_outcome(mode, cadence, today, GenerationFailure::Unavailable);
        };

        let prompt = prompt::build_task_prompt(mode, cadence, count, profile);
        let prompt_hash = short_hash(&prompt, 16);

        let response =
            match tokio::time::timeout(self.timeout, generator.generate(&prompt, self.max_tokens))
                .await
            {
                Err(_) => {
                    let reason = GenerationFailure::Timeout(self.timeout);
                    return fallback_outcome(mode, cadence, today, reason);
                }
                Ok(Err(err)) => {
                    let reason = GenerationFailure::Backend(format!("{err:#}"));
                    return fallback_outcome(mode, cadence, today, reason);
                }
                Ok(Ok(text)) => text,
            };

        match parse::parse_generated_tasks(&response) {
            Ok(tasks) => {
                let items: Vec<ContentItem> = tasks
                    .into_iter()
                    .take(count)
                    .map(|t| generated_item(mode, cadence, t, &prompt_hash, today))
                    .collect();
                info!(%mode, cadence = cadence.as_str(), count = items.len(), "generated tasks");
                GenerationOutcome::Generated(items)
            }
            Err(msg) => fallback_outcome(mode, cadence, today, GenerationFailure::Malformed(msg)),
        }
    }
}

fn fallback_outcome(
    mode: RelationshipMode,
    cadence: TaskCadence,
    today: NaiveDate,
    reason: GenerationFailure,
) -> GenerationOutcome {
    warn!(%mode, cadence = cadence.as_str(), %reason, "serving default tasks");
    GenerationOutcome::Fallback {
        items: fallback::default_tasks(mode, cadence, today),
        reason,
    }
}

fn generated_item(
    mode: RelationshipMode,
    cadence: TaskCadence,
    task: parse::GeneratedTask,
    prompt_hash: &str,
    today: NaiveDate,
) -> ContentItem {
    let default_category = match cadence {
        TaskCadence::Daily => TaskCategory::Communication,
        TaskCadence::Weekly => TaskCategory::PhysicalActivity,
    };
    let category = task
        .category
        .as_deref()
        .and_then(|c| c.parse::<TaskCategory>().ok())
        .unwrap_or(default_category);

    let mut details = TaskDetails::for_cadence(
        cadence,
        task.description.clone().unwrap_or_else(|| task.title.clone()),
        task.tips.clone().unwrap_or_default(),
    );
    if let Some(minutes) = task.estimated_time_minutes {
        details.estimated_time_minutes = minutes;
    }
    if let Some(physical) = task.is_physical {
        details.is_physical = physical;
    }

    ContentItem {
        id: dated_item_id("ai", &task.title, today),
        text: task.title,
        kind: ContentKind::Tasks,
        category: ItemCategory::Task(category),
        mode,
        details: Some(details),
        metadata: ItemMetadata::Generated {
            source: GenerationSource::Ai,
            prompt_hash: prompt_hash.to_string(),
        },
    }
}
