//! Group filters: ignored directories, excluded rules, and baseline display.

use crate::classify::rule_ref;
use std::collections::HashSet;

/// Subtrees imported from other projects. Their style differs from ours, so
/// violations there are not actionable.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "lib/libfdt",
    "include/lib/libfdt",
    "lib/compiler-rt",
    "lib/zlib",
    "include/lib/zlib",
];

/// Checkers whose findings are never reported.
pub const DEFAULT_RULE_EXCLUSIONS: &[&str] = &[
    "MISRA C-2012 Rule 2.4",
    "MISRA C-2012 Rule 2.5",
    "MISRA C-2012 Rule 2.7",
    "MISRA C-2012 Rule 5.1",
    "MISRA C-2012 Rule 5.8",
    "MISRA C-2012 Rule 8.6",
    "MISRA C-2012 Rule 8.7",
    "MISRA C-2012 Rule 11.4",
    "MISRA C-2012 Rule 11.5",
    "MISRA C-2012 Rule 15.1",
    "MISRA C-2012 Rule 15.5",
    "MISRA C-2012 Rule 15.6",
    "MISRA C-2012 Rule 16.1",
    "MISRA C-2012 Rule 16.3",
    "MISRA C-2012 Rule 17.1",
    "MISRA C-2012 Rule 21.6",
    "MISRA C-2012 Directive 4.6",
    "MISRA C-2012 Directive 4.8",
    "MISRA C-2012 Directive 4.9",
];

/// Strip every leading `/` so paths compare repository-relative.
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[derive(Debug, Clone)]
/// Raw string-prefix test against ignored subtrees.
///
/// No segment boundary is enforced: `lib/libfdt` also ignores `lib/libfdt2`.
pub struct DirectoryExclusionPolicy {
    prefixes: Vec<String>,
}

impl DirectoryExclusionPolicy {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

impl Default for DirectoryExclusionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS.iter().copied())
    }
}

#[derive(Debug, Clone)]
/// Excluded checker names.
///
/// A checker is excluded when it equals an entry, or when its trailing
/// `<kind> <number>` equals the tail of an entry, so `"Rule 2.4"` and
/// `"MISRA C-2012 Rule 2.4"` exclude each other.
pub struct RuleExclusions {
    checkers: HashSet<String>,
    refs: HashSet<(String, String)>,
}

impl RuleExclusions {
    pub fn new<I, S>(checkers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let checkers: HashSet<String> = checkers.into_iter().map(Into::into).collect();
        let refs = checkers
            .iter()
            .filter_map(|c| rule_ref(c))
            .map(|(kind, number)| (kind.to_string(), number.to_string()))
            .collect();
        Self { checkers, refs }
    }

    pub fn contains(&self, checker: &str) -> bool {
        if self.checkers.contains(checker) {
            return true;
        }
        rule_ref(checker).is_some_and(|(kind, number)| {
            self.refs.contains(&(kind.to_string(), number.to_string()))
        })
    }
}

impl Default for RuleExclusions {
    fn default() -> Self {
        Self::new(DEFAULT_RULE_EXCLUSIONS.iter().copied())
    }
}

#[derive(Debug, Clone, Default)]
/// Everything a schema adapter needs to decide whether a group is kept.
pub struct FilterPolicy {
    pub dirs: DirectoryExclusionPolicy,
    pub rules: RuleExclusions,
    /// Keep groups already present in the comparison snapshot.
    pub show_all: bool,
}

impl FilterPolicy {
    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }
}
