//! Configuration discovery and effective settings resolution.
//!
//! covfilter reads `covfilter.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `show_all`: false
//! - `ignored_dirs`: the built-in list of imported subtrees
//! - `rule_exclusions`: the built-in list of MISRA checkers
//!
//! Overrides precedence: CLI > config file > defaults. Lists in the config
//! file replace the defaults instead of extending them.

use crate::error::{Error, Result};
use crate::policy::{
    DirectoryExclusionPolicy, FilterPolicy, RuleExclusions, DEFAULT_IGNORED_DIRS,
    DEFAULT_RULE_EXCLUSIONS,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["covfilter.toml", "covfilter.yaml", "covfilter.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `covfilter.toml|yaml`.
pub struct CovfilterConfig {
    pub output: Option<String>,
    pub show_all: Option<bool>,
    pub ignored_dirs: Option<Vec<String>>,
    pub rule_exclusions: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub show_all: bool,
    pub ignored_dirs: Vec<String>,
    pub rule_exclusions: Vec<String>,
}

impl Effective {
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy {
            dirs: DirectoryExclusionPolicy::new(self.ignored_dirs.iter().cloned()),
            rules: RuleExclusions::new(self.rule_exclusions.iter().cloned()),
            show_all: self.show_all,
        }
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
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

/// Load `CovfilterConfig` from the first config file present in `root`.
///
/// Returns `Ok(None)` when there is no config file; a file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, CovfilterConfig)>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<CovfilterConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<CovfilterConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(Error::Config { path, message }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_show_all: Option<bool>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, CovfilterConfig::default()),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let show_all = cli_show_all.or(cfg.show_all).unwrap_or(false);
    let ignored_dirs = cfg
        .ignored_dirs
        .unwrap_or_else(|| DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect());
    let rule_exclusions = cfg
        .rule_exclusions
        .unwrap_or_else(|| DEFAULT_RULE_EXCLUSIONS.iter().map(|s| s.to_string()).collect());

    Ok(Effective {
        repo_root,
        config_path,
        output,
        show_all,
        ignored_dirs,
        rule_exclusions,
    })
}
