// src/rotation/tasks.rs

//! Daily (monthly-seeded) and weekly (yearly-seeded) task windows.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::content::{ContentItem, ItemCategory, ItemMetadata, TaskDetails, dated_item_id};
use crate::errors::Result;
use crate::pool::ContentPool;
use crate::rotation::seed::PeriodKey;
use crate::rotation::shuffle::shuffle;
use crate::rotation::window::{check_count, daily_task_indices, weekly_task_indices};
use crate::types::{ContentKind, RelationshipMode, TaskCadence, TaskCategory};

/// `count` tasks for `today`: the pool is shuffled once per month and a
/// window starting at `(day_of_month * count) mod len` is taken from it.
pub fn daily_tasks(
    mode: RelationshipMode,
    pool: &ContentPool,
    count: usize,
    today: NaiveDate,
) -> Result<Vec<ContentItem>> {
    check_count(pool.label(), count, pool.len())?;

    let key = PeriodKey::monthly(today, format!("{mode}-daily"));
    let seed = key.seed();
    let shuffled = shuffle(pool.items(), seed);
    let day_of_month = today.day();
    let indices = daily_task_indices(day_of_month, count, shuffled.len());

    debug!(
        %mode,
        period_key = %key,
        granularity = ?key.granularity(),
        %seed,
        day_of_month,
        ?indices,
        "selected daily tasks"
    );

    let period_key = key.to_string();
    Ok(indices
        .into_iter()
        .map(|idx| {
            let text = &shuffled[idx];
            ContentItem {
                id: dated_item_id(mode.id_prefix(), text, today),
                text: text.clone(),
                kind: ContentKind::Tasks,
                category: ItemCategory::Task(TaskCategory::Communication),
                mode,
                details: Some(TaskDetails::for_cadence(
                    TaskCadence::Daily,
                    text.clone(),
                    tip_for(mode, TaskCadence::Daily),
                )),
                metadata: ItemMetadata::DailyTasks {
                    period_key: period_key.clone(),
                    seed,
                    day_of_month,
                },
            }
        })
        .collect())
}

/// `count` tasks for the ISO week containing `today`, from a pool shuffled
/// once per calendar year.
pub fn weekly_tasks(
    mode: RelationshipMode,
    pool: &ContentPool,
    count: usize,
    today: NaiveDate,
) -> Result<Vec<ContentItem>> {
    check_count(pool.label(), count, pool.len())?;

    let key = PeriodKey::yearly(today, format!("{mode}-weekly"));
    let seed = key.seed();
    let shuffled = shuffle(pool.items(), seed);
    let week_of_year = today.iso_week().week();
    let indices = weekly_task_indices(week_of_year, count, shuffled.len());

    debug!(
        %mode,
        period_key = %key,
        granularity = ?key.granularity(),
        %seed,
        week_of_year,
        ?indices,
        "selected weekly tasks"
    );

    let period_key = key.to_string();
    let prefix = format!("{}w", mode.id_prefix());
    Ok(indices
        .into_iter()
        .map(|idx| {
            let text = &shuffled[idx];
            ContentItem {
                id: dated_item_id(&prefix, text, today),
                text: text.clone(),
                kind: ContentKind::Tasks,
                category: ItemCategory::Task(TaskCategory::PhysicalActivity),
                mode,
                details: Some(TaskDetails::for_cadence(
                    TaskCadence::Weekly,
                    text.clone(),
                    tip_for(mode, TaskCadence::Weekly),
                )),
                metadata: ItemMetadata::WeeklyTasks {
                    period_key: period_key.clone(),
                    seed,
                    week_of_year,
                },
            }
        })
        .collect())
}

fn tip_for(mode: RelationshipMode, cadence: TaskCadence) -> &'static str {
    match (cadence, mode) {
        (TaskCadence::Daily, RelationshipMode::SameHome) => "Perfect for couples living together!",
        (TaskCadence::Daily, RelationshipMode::DailyInPerson) => "Perfect for couples who meet daily!",
        (TaskCadence::Daily, RelationshipMode::LongDistance) => "Perfect for long-distance couples!",
        (TaskCadence::Weekly, RelationshipMode::SameHome) => {
            "Perfect weekly activity for couples living together!"
        }
        (TaskCadence::Weekly, RelationshipMode::DailyInPerson) => {
            "Perfect weekly activity for couples meeting daily!"
        }
        (TaskCadence::Weekly, RelationshipMode::LongDistance) => {
            "Perfect weekly activity for long-distance couples!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RotationError;
    use std::collections::HashSet;

    fn pool(n: usize) -> ContentPool {
        ContentPool::new("test", (0..n).map(|i| format!("task-{i}")).collect()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_selection_is_reproducible() {
        let p = pool(90);
        let today = date(2025, 6, 15);
        let a = daily_tasks(RelationshipMode::SameHome, &p, 3, today).unwrap();
        let b = daily_tasks(RelationshipMode::SameHome, &p, 3, today).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        match &a[0].metadata {
            ItemMetadata::DailyTasks { day_of_month, period_key, .. } => {
                assert_eq!(*day_of_month, 15);
                assert_eq!(period_key, "2025-6-SAME_HOME-daily");
            }
            other => panic!("unexpected metadata {other:?}"),
        }
    }

    #[test]
    fn daily_window_covers_whole_pool_without_repeats() {
        let p = pool(90);
        let items = daily_tasks(RelationshipMode::LongDistance, &p, 90, date(2025, 1, 7)).unwrap();
        let distinct: HashSet<_> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(distinct.len(), 90);
    }

    #[test]
    fn oversized_request_is_rejected() {
        let err = daily_tasks(RelationshipMode::SameHome, &pool(5), 6, date(2025, 6, 1)).unwrap_err();
        assert!(matches!(err, RotationError::CountExceedsPool { requested: 6, pool_size: 5, .. }));
    }

    #[test]
    fn weekly_selection_is_stable_within_the_week_seed() {
        let p = pool(50);
        // 2025-12-15 is the Monday of ISO week 51; index (51 - 1) mod 50 = 0.
        let mon = weekly_tasks(RelationshipMode::DailyInPerson, &p, 1, date(2025, 12, 15)).unwrap();
        let sun = weekly_tasks(RelationshipMode::DailyInPerson, &p, 1, date(2025, 12, 21)).unwrap();
        assert_eq!(mon[0].text, sun[0].text);
        assert_ne!(mon[0].id, sun[0].id);

        let seed = PeriodKey::yearly(date(2025, 1, 1), "DAILY_IN_PERSON-weekly").seed();
        assert_eq!(mon[0].text, shuffle(p.items(), seed)[0]);
    }

    #[test]
    fn weekly_items_carry_weekly_details() {
        let items = weekly_tasks(RelationshipMode::SameHome, &pool(50), 1, date(2025, 3, 3)).unwrap();
        let details = items[0].details.as_ref().unwrap();
        assert_eq!(details.points, 25);
        assert!(details.is_physical);
        assert!(items[0].id.starts_with("shw_"));
        assert_eq!(items[0].category, ItemCategory::Task(TaskCategory::PhysicalActivity));
    }
}
