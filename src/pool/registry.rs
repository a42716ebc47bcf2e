// src/pool/registry.rs

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::{Result, RotationError};
use crate::fs::FileSystem;
use crate::pool::file::parse_mode_content;
use crate::pool::{ContentPool, ModePools, PoolKind};
use crate::types::RelationshipMode;

const EMBEDDED: [(RelationshipMode, &str); 3] = [
    (
        RelationshipMode::SameHome,
        include_str!("../../content/same_home.toml"),
    ),
    (
        RelationshipMode::DailyInPerson,
        include_str!("../../content/daily_in_person.toml"),
    ),
    (
        RelationshipMode::LongDistance,
        include_str!("../../content/long_distance.toml"),
    ),
];

/// Immutable set of content pools keyed by relationship mode.
///
/// Built once, validated eagerly, never mutated afterwards. A mode may be
/// absent (e.g. a substitute registry in tests); lookups for it fail with
/// [`RotationError::NoContentForMode`] rather than borrowing another mode's
/// pools.
#[derive(Debug, Clone)]
pub struct PoolRegistry {
    modes: BTreeMap<RelationshipMode, ModePools>,
}

impl PoolRegistry {
    pub fn from_modes(modes: BTreeMap<RelationshipMode, ModePools>) -> Result<Self> {
        if modes.is_empty() {
            return Err(RotationError::PoolError(
                "registry contains no relationship modes".to_string(),
            ));
        }
        Ok(Self { modes })
    }

    /// The pools compiled into the binary from `content/*.toml`.
    pub fn embedded() -> Result<Self> {
        let mut modes = BTreeMap::new();
        for (mode, text) in EMBEDDED {
            modes.insert(mode, parse_mode_content(mode, "embedded", text)?);
        }
        let registry = Self::from_modes(modes)?;
        registry.log_summary("embedded");
        Ok(registry)
    }

    /// Load `<dir>/<mode>.toml` for every mode whose file exists.
    ///
    /// Files that do not name a known mode are ignored with a warning.
    pub fn load_dir(fs: &dyn FileSystem, dir: &Path) -> Result<Self> {
        if !fs.is_dir(dir) {
            return Err(RotationError::ConfigError(format!(
                "content directory {dir:?} does not exist"
            )));
        }

        let known: Vec<String> = RelationshipMode::ALL
            .iter()
            .map(|m| format!("{}.toml", m.file_stem()))
            .collect();
        for entry in fs.read_dir(dir)? {
            let name = entry.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if !known.iter().any(|k| k == name) {
                warn!(path = ?entry, "ignoring file in content directory");
            }
        }

        let mut modes = BTreeMap::new();
        for mode in RelationshipMode::ALL {
            let path = dir.join(format!("{}.toml", mode.file_stem()));
            if !fs.is_file(&path) {
                debug!(%mode, path = ?path, "no content file for mode");
                continue;
            }
            let text = fs
                .read_to_string(&path)
                .map_err(|e| RotationError::PoolError(format!("{e:#}")))?;
            let origin = path.display().to_string();
            modes.insert(mode, parse_mode_content(mode, &origin, &text)?);
        }

        let registry = Self::from_modes(modes)?;
        registry.log_summary(&dir.display().to_string());
        Ok(registry)
    }

    pub fn modes(&self) -> impl Iterator<Item = RelationshipMode> + '_ {
        self.modes.keys().copied()
    }

    pub fn contains(&self, mode: RelationshipMode) -> bool {
        self.modes.contains_key(&mode)
    }

    pub fn get(&self, mode: RelationshipMode) -> Option<&ModePools> {
        self.modes.get(&mode)
    }

    pub fn pool(&self, mode: RelationshipMode, kind: PoolKind) -> Result<&ContentPool> {
        self.get(mode)
            .map(|pools| pools.pool(kind))
            .ok_or_else(|| RotationError::NoContentForMode {
                mode: mode.to_string(),
                pool: kind.to_string(),
            })
    }

    fn log_summary(&self, source: &str) {
        for (mode, pools) in &self.modes {
            info!(
                source,
                %mode,
                daily_tasks = pools.daily_tasks.len(),
                weekly_tasks = pools.weekly_tasks.len(),
                "loaded content pools"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use std::path::PathBuf;
    use crate::types::MessageCategory;

    #[test]
    fn embedded_pools_have_nominal_sizes() {
        let registry = PoolRegistry::embedded().unwrap();
        for mode in RelationshipMode::ALL {
            let pools = registry.get(mode).unwrap();
            assert_eq!(pools.daily_tasks.len(), 90, "{mode} daily");
            assert_eq!(pools.weekly_tasks.len(), 50, "{mode} weekly");
            for category in MessageCategory::ALL {
                assert!(pools.message_pool(category).len() >= 3, "{mode} {category}");
            }
        }
    }

    #[test]
    fn load_dir_skips_modes_without_files() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "pools/long_distance.toml",
            EMBEDDED[2].1,
        );
        fs.add_file("pools/README.md", "notes");

        let registry = PoolRegistry::load_dir(&fs, Path::new("pools")).unwrap();
        assert!(registry.contains(RelationshipMode::LongDistance));
        assert!(!registry.contains(RelationshipMode::SameHome));

        let err = registry
            .pool(RelationshipMode::SameHome, PoolKind::DailyTasks)
            .unwrap_err();
        assert!(matches!(err, RotationError::NoContentForMode { .. }));
    }

    #[test]
    fn load_dir_with_no_mode_files_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_dir("pools");
        assert!(PoolRegistry::load_dir(&fs, Path::new("pools")).is_err());
    }

    #[derive(Debug)]
    struct UnlistableDir;

    impl FileSystem for UnlistableDir {
        fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
            anyhow::bail!("unexpected read of {path:?}")
        }
        fn is_file(&self, _path: &Path) -> bool {
            false
        }
        fn is_dir(&self, _path: &Path) -> bool {
            true
        }
        fn read_dir(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
            anyhow::bail!("permission denied listing {path:?}")
        }
    }

    #[test]
    fn unreadable_directory_surfaces_the_filesystem_error() {
        let err = PoolRegistry::load_dir(&UnlistableDir, Path::new("pools")).unwrap_err();
        match err {
            RotationError::Other(e) => assert!(format!("{e:#}").contains("permission denied")),
            other => panic!("expected Other, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_a_config_error() {
        let fs = MockFileSystem::new();
        let err = PoolRegistry::load_dir(&fs, Path::new("nowhere")).unwrap_err();
        assert!(matches!(err, RotationError::ConfigError(_)));
    }
}
