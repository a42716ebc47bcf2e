#![allow(dead_code)]

pub use pookie_rotation_test_utils::builders;
pub use pookie_rotation_test_utils::fake_generator;
pub use pookie_rotation_test_utils::{init_tracing, with_timeout};

use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn texts(items: &[pookie_rotation::content::ContentItem]) -> Vec<String> {
    items.iter().map(|i| i.text.clone()).collect()
}
