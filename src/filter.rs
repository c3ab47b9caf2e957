//! Relevance filtering for scanned report blocks.
//!
//! Two independent predicates, both evaluated per block, discard if either
//! fails: path exclusion (case-sensitive substring containment) and
//! collection inclusion (exact allow-list membership). No other field
//! participates. The sets below are the built-in defaults; `idxsift.toml`
//! can override either one (see `config`).

use crate::models::report::RawBlock;
use std::collections::BTreeSet;

/// Path fragments that disqualify a suggestion regardless of collection:
/// test files, e2e suites, one-off scripts, and migrations.
pub const DEFAULT_EXCLUDED_PATH_MARKERS: &[&str] = &[
    "test-",
    "__tests__/",
    ".test.",
    ".spec.",
    "scripts/",
    "migrations/",
    "e2e/",
];

/// Collections considered operationally significant.
pub const DEFAULT_COLLECTIONS: &[&str] = &[
    "team_members",
    "projects",
    "tasks",
    "contacts",
    "companies",
    "campaigns",
    "media_assets",
    "notifications",
];

#[derive(Debug, Clone)]
/// Criteria applied to every scanned block before normalization.
pub struct FilterCriteria {
    pub exclude_paths: Vec<String>,
    pub collections: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            exclude_paths: DEFAULT_EXCLUDED_PATH_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            collections: DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterCriteria {
    /// True when `path` contains any configured exclusion fragment.
    pub fn path_excluded(&self, path: &str) -> bool {
        self.exclude_paths.iter().any(|m| path.contains(m.as_str()))
    }

    /// True when `name` is an exact member of the allow-list.
    pub fn collection_allowed(&self, name: &str) -> bool {
        self.collections.contains(name)
    }

    /// Both predicates must pass for the block to proceed.
    pub fn retains(&self, block: &RawBlock) -> bool {
        !self.path_excluded(&block.file_path) && self.collection_allowed(&block.collection)
    }
}
