// tests/weekly.rs
mod common;
use crate::common::builders::{PoolRegistryBuilder, embedded_engine, engine_with};
use crate::common::{date, init_tracing, texts};

use std::error::Error;

use pookie_rotation::content::ItemMetadata;
use pookie_rotation::rotation::window::weekly_task_indices;
use pookie_rotation::types::{ContentKind, RelationshipMode};

type TestResult = Result<(), Box<dyn Error>>;

fn week_of(items: &[pookie_rotation::content::ContentItem]) -> u32 {
    match &items[0].metadata {
        ItemMetadata::WeeklyTasks { week_of_year, .. } => *week_of_year,
        other => panic!("unexpected metadata {other:?}"),
    }
}

#[test]
fn weeks_51_and_52_wrap_around_a_pool_of_fifty() {
    assert_eq!(weekly_task_indices(51, 1, 50), vec![0]);
    assert_eq!(weekly_task_indices(52, 1, 50), vec![1]);
    assert_eq!(weekly_task_indices(52, 3, 50), vec![1, 2, 3]);
}

#[test]
fn year_end_weeks_reuse_the_start_of_the_yearly_shuffle() -> TestResult {
    init_tracing();
    let engine = embedded_engine();
    let mode = RelationshipMode::SameHome;

    let week_1 = engine.select_weekly_tasks(mode, 1, date(2025, 1, 1))?;
    let week_2 = engine.select_weekly_tasks(mode, 1, date(2025, 1, 8))?;
    let week_51 = engine.select_weekly_tasks(mode, 1, date(2025, 12, 15))?;
    let week_52 = engine.select_weekly_tasks(mode, 1, date(2025, 12, 22))?;

    assert_eq!(week_of(&week_1), 1);
    assert_eq!(week_of(&week_51), 51);
    assert_eq!(week_of(&week_52), 52);
    assert_eq!(texts(&week_51), texts(&week_1));
    assert_eq!(texts(&week_52), texts(&week_2));
    Ok(())
}

#[test]
fn every_day_of_an_iso_week_gets_the_same_task() -> TestResult {
    let engine = embedded_engine();
    let monday = engine.get_weekly_content("LONG_DISTANCE", date(2025, 6, 9))?;
    for day in 10..=15 {
        let other = engine.get_weekly_content("LONG_DISTANCE", date(2025, 6, day))?;
        assert_eq!(texts(&other), texts(&monday), "2025-06-{day}");
    }
    Ok(())
}

#[test]
fn weekly_items_carry_weekly_details() -> TestResult {
    let engine = embedded_engine();
    let items = engine.get_weekly_content("SAME_HOME", date(2025, 6, 15))?;
    let item = &items[0];

    assert_eq!(item.kind, ContentKind::Tasks);
    assert!(item.id.starts_with("shw_"));
    let details = item.details.as_ref().expect("weekly tasks have details");
    assert_eq!(details.points, 25);
    assert_eq!(details.estimated_time_minutes, 90);
    assert!(details.is_physical);
    assert_eq!(item.metadata.period_key(), Some("2025-SAME_HOME-weekly"));
    Ok(())
}

#[test]
fn multi_item_weekly_window_has_no_repeats() -> TestResult {
    let registry = PoolRegistryBuilder::new()
        .with_mode(RelationshipMode::DailyInPerson, 5, 4, 5)
        .build();
    let engine = engine_with(registry, 1, 4, 1);

    let items = engine.select_weekly_tasks(RelationshipMode::DailyInPerson, 4, date(2025, 12, 29))?;
    let mut names = texts(&items);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 4);
    Ok(())
}
