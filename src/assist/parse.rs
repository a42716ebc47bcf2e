// src/assist/parse.rs

//! Turn loosely-structured generator output into tasks.
//!
//! Accepted shapes, tried in order:
//! 1. a JSON object `{"tasks": [...]}`, bare or inside a fenced block,
//! 2. a numbered or bulleted list, one task title per line.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub estimated_time_minutes: Option<u32>,
    pub tips: Option<String>,
    pub is_physical: Option<bool>,
}

impl GeneratedTask {
    fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
            estimated_time_minutes: None,
            tips: None,
            is_physical: None,
        }
    }
}

pub fn parse_generated_tasks(response: &str) -> Result<Vec<GeneratedTask>, String> {
    if let Some(tasks) = parse_json(response) {
        if !tasks.is_empty() {
            return Ok(tasks);
        }
    }

    let listed = parse_list(response);
    if listed.is_empty() {
        return Err(format!(
            "no tasks found in {} bytes of generator output",
            response.len()
        ));
    }
    Ok(listed)
}

fn parse_json(response: &str) -> Option<Vec<GeneratedTask>> {
    static FENCED: OnceLock<Regex> = OnceLock::new();
    let fenced = FENCED.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(\{.*\})\s*```").expect("fence pattern is valid")
    });

    let candidate = match fenced.captures(response) {
        Some(caps) => caps.get(1)?.as_str(),
        None => {
            let start = response.find('{')?;
            let end = response.rfind('}')?;
            if end < start {
                return None;
            }
            &response[start..=end]
        }
    };

    let value: Value = serde_json::from_str(candidate).ok()?;
    let tasks = value.get("tasks")?.as_array()?;
    Some(tasks.iter().filter_map(task_from_value).collect())
}

fn task_from_value(value: &Value) -> Option<GeneratedTask> {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let title = text("title")?;
    Some(GeneratedTask {
        title,
        description: text("description"),
        category: text("category"),
        estimated_time_minutes: value
            .get("estimated_time_minutes")
            .and_then(Value::as_u64)
            .and_then(|m| u32::try_from(m).ok()),
        tips: text("tips"),
        is_physical: value.get("is_physical").and_then(Value::as_bool),
    })
}

fn parse_list(response: &str) -> Vec<GeneratedTask> {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    let item = ITEM.get_or_init(|| {
        Regex::new(r"(?m)^\s*(?:\d+[.)]|[-*•])\s+(.+?)\s*$").expect("list pattern is valid")
    });

    item.captures_iter(response)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_matches('"'))
        .filter(|s| !s.is_empty())
        .map(GeneratedTask::titled)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_is_parsed_with_optional_fields() {
        let text = r#"{"tasks":[{"title":"Share a song","category":"MicroActivity","estimated_time_minutes":3,"is_physical":false}]}"#;
        let tasks = parse_generated_tasks(text).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Share a song");
        assert_eq!(tasks[0].category.as_deref(), Some("MicroActivity"));
        assert_eq!(tasks[0].estimated_time_minutes, Some(3));
        assert_eq!(tasks[0].description, None);
    }

    #[test]
    fn fenced_json_with_chatter_is_parsed() {
        let text = "Sure! Here you go:\n```json\n{\"tasks\": [{\"title\": \"Cook dinner together\"}]}\n```\nEnjoy!";
        let tasks = parse_generated_tasks(text).unwrap();
        assert_eq!(tasks[0].title, "Cook dinner together");
    }

    #[test]
    fn tasks_without_titles_are_dropped() {
        let text = r#"{"tasks":[{"description":"nameless"},{"title":"  "},{"title":"Hug"}]}"#;
        let tasks = parse_generated_tasks(text).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Hug");
    }

    #[test]
    fn numbered_list_is_accepted() {
        let text = "Tasks:\n1. Send a sweet text\n2) Give a long hug\n- \"Ask about their day\"\n";
        let titles: Vec<String> = parse_generated_tasks(text)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Send a sweet text", "Give a long hug", "Ask about their day"]);
    }

    #[test]
    fn prose_is_rejected() {
        assert!(parse_generated_tasks("I cannot help with that right now.").is_err());
        assert!(parse_generated_tasks("").is_err());
    }
}
