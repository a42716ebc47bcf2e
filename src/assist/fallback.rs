// src/assist/fallback.rs

//! Hand-written defaults served whenever generation fails.

use chrono::NaiveDate;

use crate::content::{ContentItem, GenerationSource, ItemCategory, ItemMetadata, TaskDetails};
use crate::types::{ContentKind, RelationshipMode, TaskCadence, TaskCategory};

struct DefaultTask {
    title: &'static str,
    description: &'static str,
    category: TaskCategory,
    minutes: u32,
    tips: &'static str,
}

const DAILY: [DefaultTask; 3] = [
    DefaultTask {
        title: "Send your partner a loving text message",
        description: "Send a sweet message expressing your love or appreciation",
        category: TaskCategory::Communication,
        minutes: 3,
        tips: "Be specific about what you appreciate about them today",
    },
    DefaultTask {
        title: "Give your partner a warm 20-second hug",
        description: "Share a meaningful physical connection with a long, warm hug",
        category: TaskCategory::ThoughtfulGesture,
        minutes: 2,
        tips: "Hold the hug for at least 20 seconds and focus on the moment",
    },
    DefaultTask {
        title: "Ask 'What was the best part of your day?'",
        description: "Show genuine interest in your partner's daily experiences",
        category: TaskCategory::Communication,
        minutes: 5,
        tips: "Listen actively and ask follow-up questions to show you care",
    },
];

const WEEKLY: [DefaultTask; 1] = [DefaultTask {
    title: "Cook a meal together this week",
    description: "Plan and prepare a meal together as a team",
    category: TaskCategory::PhysicalActivity,
    minutes: 90,
    tips: "Choose a recipe you both enjoy and divide the cooking tasks",
}];

/// The default tasks for `cadence`. Never empty.
pub fn default_tasks(mode: RelationshipMode, cadence: TaskCadence, today: NaiveDate) -> Vec<ContentItem> {
    let defaults: &[DefaultTask] = match cadence {
        TaskCadence::Daily => &DAILY,
        TaskCadence::Weekly => &WEEKLY,
    };

    defaults
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let details = TaskDetails {
                description: task.description.to_string(),
                estimated_time_minutes: task.minutes,
                tips: task.tips.to_string(),
                ..TaskDetails::for_cadence(cadence, "", "")
            };

            ContentItem {
                id: format!("fallback_{}_{}_{}", cadence.as_str(), i + 1, today.format("%Y%m%d")),
                text: task.title.to_string(),
                kind: ContentKind::Tasks,
                category: ItemCategory::Task(task.category),
                mode,
                details: Some(details),
                metadata: ItemMetadata::Generated {
                    source: GenerationSource::Fallback,
                    prompt_hash: "fallback".to_string(),
                },
            }
        })
        .collect()
}
