// src/rotation/window.rs

//! Index arithmetic for selection windows over a shuffled pool.
//!
//! Every function here is pure. Callers must run [`check_count`] first; the
//! window helpers assume `0 < count <= pool_size`.

use crate::errors::{Result, RotationError};

/// Message windows repeat on a fixed 30-day cycle, independent of month length.
pub const ROTATION_CYCLE_DAYS: u32 = 30;

/// Per-category offset that keeps categories from landing on the same slot.
pub const CATEGORY_STRIDE: usize = 7;

/// Reject selections that would be empty or would wrap onto themselves.
pub fn check_count(pool: &str, requested: usize, pool_size: usize) -> Result<()> {
    if requested == 0 {
        return Err(RotationError::EmptySelection {
            pool: pool.to_string(),
        });
    }
    if requested > pool_size {
        return Err(RotationError::CountExceedsPool {
            pool: pool.to_string(),
            requested,
            pool_size,
        });
    }
    Ok(())
}

/// `count` consecutive indices starting at `start`, wrapping at `pool_size`.
pub fn wrapping_window(start: usize, count: usize, pool_size: usize) -> Vec<usize> {
    (0..count).map(|i| (start + i) % pool_size).collect()
}

/// Daily task window: starts at `(day_of_month * count) mod pool_size`.
pub fn daily_task_indices(day_of_month: u32, count: usize, pool_size: usize) -> Vec<usize> {
    let start = (day_of_month as usize * count) % pool_size;
    wrapping_window(start, count, pool_size)
}

/// Weekly task window: `(week_of_year - 1 + i) mod pool_size`.
pub fn weekly_task_indices(week_of_year: u32, count: usize, pool_size: usize) -> Vec<usize> {
    let start = week_of_year.saturating_sub(1) as usize;
    wrapping_window(start, count, pool_size)
}

/// `day_of_year mod 30`.
pub fn rotation_day(day_of_year: u32) -> u32 {
    day_of_year % ROTATION_CYCLE_DAYS
}

/// Index of message `slot` for the category at `category_index`.
pub fn message_index(
    rotation_day: u32,
    per_category: usize,
    slot: usize,
    category_index: usize,
    pool_size: usize,
) -> usize {
    let base = (rotation_day as usize * per_category + slot) % pool_size;
    (base + category_index * CATEGORY_STRIDE) % pool_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn daily_window_wraps_around_the_end() {
        // day 31, 3 per day, 90 items: start = 93 mod 90 = 3
        assert_eq!(daily_task_indices(31, 3, 90), vec![3, 4, 5]);
        // start 88 with 3 items wraps to 0
        assert_eq!(wrapping_window(88, 3, 90), vec![88, 89, 0]);
    }

    #[test]
    fn weekly_window_wraps_near_year_end() {
        assert_eq!(weekly_task_indices(51, 1, 50), vec![0]);
        assert_eq!(weekly_task_indices(52, 1, 50), vec![1]);
        assert_eq!(weekly_task_indices(53, 2, 50), vec![2, 3]);
        assert_eq!(weekly_task_indices(1, 1, 50), vec![0]);
    }

    #[test]
    fn window_has_no_duplicates_when_count_fits() {
        for start in 0..10 {
            let idx = wrapping_window(start, 10, 10);
            assert_eq!(idx.iter().collect::<HashSet<_>>().len(), 10);
        }
    }

    #[test]
    fn message_index_offsets_each_category_by_seven() {
        let per_category = 3;
        let first: Vec<usize> = (0..5)
            .map(|c| message_index(4, per_category, 0, c, 90))
            .collect();
        assert_eq!(first, vec![12, 19, 26, 33, 40]);
        // small pools wrap
        assert_eq!(message_index(29, 3, 2, 4, 18), (29 * 3 + 2 + 28) % 18);
    }

    #[test]
    fn rotation_day_cycles_every_thirty_days() {
        assert_eq!(rotation_day(60), 0);
        assert_eq!(rotation_day(61), 1);
        assert_eq!(rotation_day(365), 5);
    }

    #[test]
    fn check_count_guards_both_ends() {
        assert!(check_count("p", 3, 90).is_ok());
        assert!(check_count("p", 90, 90).is_ok());
        assert!(matches!(
            check_count("p", 91, 90),
            Err(RotationError::CountExceedsPool { requested: 91, pool_size: 90, .. })
        ));
        assert!(matches!(check_count("p", 0, 90), Err(RotationError::EmptySelection { .. })));
    }
}
