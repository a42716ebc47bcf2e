// src/rotation/mod.rs

//! Deterministic content rotation.
//!
//! Every selection is a pure function of `(date, mode, pool)`:
//!
//! 1. build a [`PeriodKey`] for the rotation period (month, year or day),
//! 2. hash it into a [`RotationSeed`],
//! 3. [`shuffle`] the pool with a generator seeded from it,
//! 4. take a window of the shuffled pool driven by the day or week.
//!
//! Nothing is cached or persisted; concurrent callers recompute identical
//! results without coordination.

pub mod messages;
pub mod seed;
pub mod shuffle;
pub mod tasks;
pub mod window;

pub use messages::daily_messages;
pub use seed::{Granularity, PeriodKey, RotationSeed, derive_seed};
pub use shuffle::shuffle;
pub use tasks::{daily_tasks, weekly_tasks};
