use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, OnceLock};

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use pookie_rotation::config::RotationSection;
use pookie_rotation::content::ItemCategory;
use pookie_rotation::engine::RotationEngine;
use pookie_rotation::pool::PoolRegistry;
use pookie_rotation::rotation::{derive_seed, shuffle};
use pookie_rotation::types::RelationshipMode;
use pookie_rotation_test_utils::builders::PoolRegistryBuilder;

fn embedded() -> &'static RotationEngine {
    static ENGINE: OnceLock<RotationEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let registry = PoolRegistry::embedded().expect("embedded content is valid");
        RotationEngine::new(Arc::new(registry), RotationSection::default()).expect("engine")
    })
}

// Any date between 2000-01-01 and roughly 2099.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..36_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

fn mode_strategy() -> impl Strategy<Value = RelationshipMode> {
    prop::sample::select(RelationshipMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn daily_tasks_are_deterministic_and_distinct(
        mode in mode_strategy(),
        today in date_strategy(),
        count in 1usize..=90,
    ) {
        let engine = embedded();
        let a = engine.select_daily_tasks(mode, count, today).unwrap();
        let b = engine.select_daily_tasks(mode, count, today).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), count);

        let unique: HashSet<_> = a.iter().map(|i| i.text.as_str()).collect();
        prop_assert_eq!(unique.len(), count);
    }

    #[test]
    fn weekly_tasks_are_deterministic_and_distinct(
        mode in mode_strategy(),
        today in date_strategy(),
        count in 1usize..=50,
    ) {
        let engine = embedded();
        let a = engine.select_weekly_tasks(mode, count, today).unwrap();
        let b = engine.select_weekly_tasks(mode, count, today).unwrap();
        prop_assert_eq!(&a, &b);

        let unique: HashSet<_> = a.iter().map(|i| i.text.as_str()).collect();
        prop_assert_eq!(unique.len(), count);
    }

    #[test]
    fn messages_are_balanced_across_categories(
        mode in mode_strategy(),
        today in date_strategy(),
        per in 1usize..=18,
    ) {
        let items = embedded().select_daily_messages(mode, per, today).unwrap();
        prop_assert_eq!(items.len(), per * 5);

        let mut grouped: BTreeMap<_, HashSet<&str>> = BTreeMap::new();
        for item in &items {
            let ItemCategory::Message(category) = item.category else {
                return Err(TestCaseError::fail("task category in message batch"));
            };
            grouped.entry(category).or_default().insert(item.text.as_str());
        }
        prop_assert_eq!(grouped.len(), 5);
        for texts in grouped.values() {
            prop_assert_eq!(texts.len(), per);
        }
    }

    #[test]
    fn oversized_requests_are_always_rejected(
        daily in 1usize..40,
        extra in 1usize..10,
        today in date_strategy(),
    ) {
        let registry = PoolRegistryBuilder::new()
            .with_mode(RelationshipMode::SameHome, daily, 5, 5)
            .build();
        let settings = RotationSection {
            daily_task_count: 1,
            weekly_task_count: 1,
            messages_per_category: 1,
        };
        let engine = RotationEngine::new(Arc::new(registry), settings).unwrap();
        prop_assert!(engine.select_daily_tasks(RelationshipMode::SameHome, daily + extra, today).is_err());
        prop_assert!(engine.select_daily_tasks(RelationshipMode::SameHome, daily, today).is_ok());
    }

    #[test]
    fn shuffle_is_a_permutation(len in 0usize..200, key in "[0-9a-z-]{1,24}") {
        let pool: Vec<usize> = (0..len).collect();
        let seed = derive_seed(&key);
        let shuffled = shuffle(&pool, seed);
        prop_assert_eq!(&shuffled, &shuffle(&pool, seed));

        let mut sorted = shuffled;
        sorted.sort_unstable();
        prop_assert_eq!(sorted, pool);
    }
}
