//! Configuration discovery and effective settings resolution.
//!
//! idxsift reads `idxsift.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `report`: `reports/index-analysis.txt`
//! - `out`: `reports/index-definitions.json`
//! - `output`: `human`
//! - `filter.collections` / `filter.exclude_paths`: the named constants in
//!   `filter`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::filter::FilterCriteria;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the upstream analyzer report.
pub const DEFAULT_REPORT_PATH: &str = "reports/index-analysis.txt";
/// Default location of the extracted definitions file.
pub const DEFAULT_OUT_PATH: &str = "reports/index-definitions.json";

#[derive(Debug, Default, Deserialize, Clone)]
/// Filter-related configuration section under `[filter]`.
pub struct FilterCfg {
    pub collections: Option<Vec<String>>,
    pub exclude_paths: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `idxsift.toml|yaml`.
pub struct SiftConfig {
    pub report: Option<String>,
    pub out: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub filter: Option<FilterCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub report: String,
    pub out: String,
    pub output: String,
    pub criteria: FilterCriteria,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `idxsift.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("idxsift.toml").exists()
            || cur.join("idxsift.yaml").exists()
            || cur.join("idxsift.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SiftConfig` from `idxsift.toml` or `idxsift.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SiftConfig> {
    let toml_path = root.join("idxsift.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SiftConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["idxsift.yaml", "idxsift.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SiftConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_report: Option<&str>,
    cli_out: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let report = cli_report
        .map(|s| s.to_string())
        .or(cfg.report)
        .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string());

    let out = cli_out
        .map(|s| s.to_string())
        .or(cfg.out)
        .unwrap_or_else(|| DEFAULT_OUT_PATH.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    // Filter sets: a configured list replaces the corresponding default
    // wholesale; the two lists override independently.
    let mut criteria = FilterCriteria::default();
    if let Some(fcfg) = cfg.filter {
        if let Some(collections) = fcfg.collections {
            criteria.collections = collections.into_iter().collect();
        }
        if let Some(exclude_paths) = fcfg.exclude_paths {
            criteria.exclude_paths = exclude_paths;
        }
    }

    Effective {
        repo_root,
        report,
        out,
        output,
        criteria,
    }
}
