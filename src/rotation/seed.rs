// src/rotation/seed.rs

//! Rotation periods and the seeds derived from them.
//!
//! A [`PeriodKey`] names one rotation period (a year, a month or a day)
//! plus a scope label such as `SAME_HOME-daily`. Its canonical text form,
//! e.g. `2025-6-SAME_HOME-daily`, is hashed with BLAKE3 and reduced modulo
//! 2^32 to give the [`RotationSeed`]. The hash is stable across processes,
//! machines and releases, unlike `std`'s randomised `DefaultHasher`.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Seeds live in `[0, 2^32)`.
pub const SEED_MODULUS: u64 = 1 << 32;

/// Calendar granularity of a rotation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Yearly,
    Monthly,
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Year { year: i32 },
    Month { year: i32, month: u32 },
    Day { year: i32, month: u32, day: u32 },
}

/// Identifies a rotation period. Month and day are unpadded, so June 2025
/// renders as `2025-6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodKey {
    period: Period,
    scope: String,
}

impl PeriodKey {
    pub fn yearly(date: NaiveDate, scope: impl Into<String>) -> Self {
        Self::new(Period::Year { year: date.year() }, scope)
    }

    pub fn monthly(date: NaiveDate, scope: impl Into<String>) -> Self {
        Self::new(
            Period::Month {
                year: date.year(),
                month: date.month(),
            },
            scope,
        )
    }

    pub fn daily(date: NaiveDate, scope: impl Into<String>) -> Self {
        Self::new(
            Period::Day {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
            scope,
        )
    }

    fn new(period: Period, scope: impl Into<String>) -> Self {
        Self {
            period,
            scope: scope.into(),
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self.period {
            Period::Year { .. } => Granularity::Yearly,
            Period::Month { .. } => Granularity::Monthly,
            Period::Day { .. } => Granularity::Daily,
        }
    }

    pub fn seed(&self) -> RotationSeed {
        derive_seed(&self.to_string())
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.period {
            Period::Year { year } => write!(f, "{year}")?,
            Period::Month { year, month } => write!(f, "{year}-{month}")?,
            Period::Day { year, month, day } => write!(f, "{year}-{month}-{day}")?,
        }
        if !self.scope.is_empty() {
            write!(f, "-{}", self.scope)?;
        }
        Ok(())
    }
}

/// Deterministic shuffle seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RotationSeed(u32);

impl RotationSeed {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<RotationSeed> for u64 {
    fn from(seed: RotationSeed) -> u64 {
        u64::from(seed.0)
    }
}

impl fmt::Display for RotationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash a period key into a seed: the first eight bytes of its BLAKE3 digest
/// read as a little-endian integer, modulo 2^32.
pub fn derive_seed(period_key: &str) -> RotationSeed {
    let digest = blake3::hash(period_key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    let wide = u64::from_le_bytes(head);
    RotationSeed((wide % SEED_MODULUS) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn keys_render_unpadded_with_scope() {
        let d = date(2025, 6, 5);
        assert_eq!(PeriodKey::yearly(d, "").to_string(), "2025");
        assert_eq!(PeriodKey::monthly(d, "").to_string(), "2025-6");
        assert_eq!(
            PeriodKey::daily(d, "LONG_DISTANCE-messages").to_string(),
            "2025-6-5-LONG_DISTANCE-messages"
        );
        assert_eq!(PeriodKey::daily(d, "x").granularity(), Granularity::Daily);
    }

    #[test]
    fn seed_is_stable_for_identical_keys() {
        assert_eq!(derive_seed("2025-6"), derive_seed("2025-6"));
        assert_eq!(
            PeriodKey::monthly(date(2025, 6, 1), "SAME_HOME-daily").seed(),
            PeriodKey::monthly(date(2025, 6, 30), "SAME_HOME-daily").seed()
        );
    }

    #[test]
    fn seed_changes_across_periods_and_scopes() {
        assert_ne!(derive_seed("2025-6"), derive_seed("2025-7"));
        assert_ne!(derive_seed("2025"), derive_seed("2026"));
        assert_ne!(
            PeriodKey::monthly(date(2025, 6, 1), "SAME_HOME-daily").seed(),
            PeriodKey::monthly(date(2025, 6, 1), "LONG_DISTANCE-daily").seed()
        );
    }

    #[test]
    fn seed_matches_truncated_digest() {
        let digest = blake3::hash(b"2025-6-15");
        let bytes = digest.as_bytes();
        let expected = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert_eq!(derive_seed("2025-6-15").value(), expected);
    }
}
