// src/assist/prompt.rs

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{RelationshipMode, TaskCadence};

/// Optional personalisation. Only used when `ai_consent` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartnerProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub favorite_food: Option<String>,
    #[serde(default)]
    pub anniversary_date: Option<NaiveDate>,
    #[serde(default)]
    pub ai_consent: bool,
}

const RESPONSE_FORMAT: &str = r#"Respond with ONLY valid JSON in this format:
{"tasks": [{"title": "...", "description": "...", "category": "...", "estimated_time_minutes": 5, "tips": "...", "is_physical": false}]}
Family-friendly content only. No purchases required for daily tasks."#;

pub fn build_task_prompt(
    mode: RelationshipMode,
    cadence: TaskCadence,
    count: usize,
    profile: Option<&PartnerProfile>,
) -> String {
    let mut prompt = format!(
        "Generate {count} {} relationship tasks for a couple in {} mode ({}).\n\n",
        cadence.as_str(),
        mode,
        mode.description()
    );

    if let Some(profile) = profile.filter(|p| p.ai_consent) {
        let mut context = String::new();
        if let Some(name) = profile.name.as_deref().filter(|n| !n.trim().is_empty()) {
            context.push_str(&format!("Partner's name: {name}\n"));
        }
        if let Some(food) = profile.favorite_food.as_deref().filter(|f| !f.trim().is_empty()) {
            context.push_str(&format!("Partner's favorite food: {food}\n"));
        }
        if let Some(date) = profile.anniversary_date {
            context.push_str(&format!("Relationship anniversary: {date}\n"));
        }
        if !context.is_empty() {
            prompt.push_str(&context);
            prompt.push('\n');
        }
    }

    match cadence {
        TaskCadence::Daily => prompt.push_str(
            "Each task must:\n\
             - take 2-5 minutes (very easy)\n\
             - need no purchase\n\
             - use a category from: Communication, ThoughtfulGesture, MicroActivity\n",
        ),
        TaskCadence::Weekly => prompt.push_str(
            "Each task must:\n\
             - be a safe physical action (meet, deliver, do a chore or activity together)\n\
             - take 30-120 minutes\n\
             - use the category PhysicalActivity and set is_physical to true\n",
        ),
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(consent: bool) -> PartnerProfile {
        PartnerProfile {
            name: Some("Asha".to_string()),
            favorite_food: Some("momos".to_string()),
            anniversary_date: NaiveDate::from_ymd_opt(2021, 2, 14),
            ai_consent: consent,
        }
    }

    #[test]
    fn prompt_names_mode_cadence_and_count() {
        let p = build_task_prompt(RelationshipMode::LongDistance, TaskCadence::Weekly, 1, None);
        assert!(p.starts_with("Generate 1 weekly relationship tasks"));
        assert!(p.contains("LONG_DISTANCE"));
        assert!(p.contains("PhysicalActivity"));
    }

    #[test]
    fn profile_is_included_only_with_consent() {
        let with = build_task_prompt(RelationshipMode::SameHome, TaskCadence::Daily, 3, Some(&profile(true)));
        let without = build_task_prompt(RelationshipMode::SameHome, TaskCadence::Daily, 3, Some(&profile(false)));
        assert!(with.contains("Partner's name: Asha"));
        assert!(with.contains("Relationship anniversary: 2021-02-14"));
        assert!(!without.contains("Asha"));
    }
}
