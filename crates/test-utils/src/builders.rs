#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use pookie_rotation::config::RotationSection;
use pookie_rotation::engine::RotationEngine;
use pookie_rotation::pool::{ContentPool, ModePools, PoolRegistry};
use pookie_rotation::types::{MessageCategory, RelationshipMode};

/// Synthetic pool sizes for one mode.
#[derive(Debug, Clone, Copy)]
pub struct PoolSizes {
    pub daily: usize,
    pub weekly: usize,
    pub messages: usize,
}

/// Builder for in-memory registries with numbered entries, so tests can
/// pick pool sizes freely and recognise entries by their text.
///
/// Entry texts look like `"SAME_HOME daily 7"` or
/// `"LONG_DISTANCE good_night 12"`.
pub struct PoolRegistryBuilder {
    modes: BTreeMap<RelationshipMode, PoolSizes>,
}

impl PoolRegistryBuilder {
    pub fn new() -> Self {
        Self {
            modes: BTreeMap::new(),
        }
    }

    pub fn with_mode(
        mut self,
        mode: RelationshipMode,
        daily: usize,
        weekly: usize,
        messages: usize,
    ) -> Self {
        self.modes.insert(
            mode,
            PoolSizes {
                daily,
                weekly,
                messages,
            },
        );
        self
    }

    /// Every mode with the same sizes.
    pub fn with_all_modes(mut self, daily: usize, weekly: usize, messages: usize) -> Self {
        for mode in RelationshipMode::ALL {
            self = self.with_mode(mode, daily, weekly, messages);
        }
        self
    }

    pub fn build(self) -> PoolRegistry {
        let modes = self
            .modes
            .into_iter()
            .map(|(mode, sizes)| (mode, mode_pools(mode, sizes)))
            .collect();
        PoolRegistry::from_modes(modes).expect("Failed to build registry from builder")
    }
}

impl Default for PoolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn numbered(label: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{label} {i}")).collect()
}

fn mode_pools(mode: RelationshipMode, sizes: PoolSizes) -> ModePools {
    let pool = |label: String, n: usize| {
        ContentPool::new(label.clone(), numbered(&label, n)).expect("Failed to build pool")
    };

    let messages = MessageCategory::ALL
        .into_iter()
        .map(|c| (c, pool(format!("{mode} {c}"), sizes.messages)))
        .collect();

    ModePools::new(
        mode,
        pool(format!("{mode} daily"), sizes.daily),
        pool(format!("{mode} weekly"), sizes.weekly),
        messages,
    )
    .expect("Failed to build mode pools")
}

/// Engine over the embedded content with default counts.
pub fn embedded_engine() -> RotationEngine {
    let registry = PoolRegistry::embedded().expect("embedded content is valid");
    RotationEngine::new(Arc::new(registry), RotationSection::default())
        .expect("default counts fit the embedded content")
}

/// Engine over `registry` with the given counts.
pub fn engine_with(
    registry: PoolRegistry,
    daily_task_count: usize,
    weekly_task_count: usize,
    messages_per_category: usize,
) -> RotationEngine {
    let settings = RotationSection {
        daily_task_count,
        weekly_task_count,
        messages_per_category,
    };
    RotationEngine::new(Arc::new(registry), settings).expect("Failed to build engine")
}
