//! Schema adapters turning raw issue groups into canonical records.
//!
//! Both generations follow the same shape, captured by `IssueGroup`:
//! decide whether the group is kept, name the checker that is counted in the
//! totals, then emit one record per occurrence/event.

use crate::classify::Classifier;
use crate::models::report::{CurrentGroup, LegacyGroup};
use crate::models::Issue;
use crate::policy::{normalize_path, FilterPolicy};

/// Why a group was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Triaged,
    ExcludedRule,
    IgnoredDirectory,
    InBaseline,
    Empty,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Triaged => "triage action is Ignore",
            DropReason::ExcludedRule => "checker is excluded",
            DropReason::IgnoredDirectory => "file is in an ignored directory",
            DropReason::InBaseline => "present in comparison snapshot",
            DropReason::Empty => "no occurrences",
        }
    }
}

/// One defect group of a raw report.
pub trait IssueGroup {
    fn cid(&self) -> u64;

    /// `Ok(())` when the group is kept.
    fn check(&self, policy: &FilterPolicy) -> Result<(), DropReason>;

    /// Checker whose classification is counted once for the whole group.
    fn counted_checker(&self) -> &str;

    /// One canonical record per occurrence/event, classified independently.
    fn records(&self, classifier: &Classifier) -> Vec<Issue>;
}

impl IssueGroup for LegacyGroup {
    fn cid(&self) -> u64 {
        self.cid
    }

    fn check(&self, policy: &FilterPolicy) -> Result<(), DropReason> {
        if self.triage.action.as_deref() == Some("Ignore") {
            return Err(DropReason::Triaged);
        }
        let first = self.occurrences.first().ok_or(DropReason::Empty)?;
        if policy.rules.contains(&first.checker) {
            return Err(DropReason::ExcludedRule);
        }
        if policy.dirs.is_ignored(&first.file) {
            return Err(DropReason::IgnoredDirectory);
        }
        // By default only defects that are new relative to the baseline are kept
        if !policy.show_all && self.present_in_comparison_snapshot {
            return Err(DropReason::InBaseline);
        }
        Ok(())
    }

    fn counted_checker(&self) -> &str {
        self.occurrences
            .first()
            .map(|o| o.checker.as_str())
            .unwrap_or_default()
    }

    fn records(&self, classifier: &Classifier) -> Vec<Issue> {
        self.occurrences
            .iter()
            .map(|o| Issue {
                cid: self.cid,
                file: normalize_path(&o.file).to_string(),
                line: o.main_event_line_number,
                checker: o.checker.clone(),
                classification: classifier.classify(&o.checker),
                description: o.main_event_description.clone(),
            })
            .collect()
    }
}

// v7+ exports carry no triage or baseline data, so only the static lists apply.
impl IssueGroup for CurrentGroup {
    fn cid(&self) -> u64 {
        self.cid
    }

    fn check(&self, policy: &FilterPolicy) -> Result<(), DropReason> {
        if policy.rules.contains(&self.checker_name) {
            return Err(DropReason::ExcludedRule);
        }
        if policy.dirs.is_ignored(&self.stripped_main_event_file_pathname) {
            return Err(DropReason::IgnoredDirectory);
        }
        Ok(())
    }

    fn counted_checker(&self) -> &str {
        &self.checker_name
    }

    fn records(&self, classifier: &Classifier) -> Vec<Issue> {
        let classification = classifier.classify(&self.checker_name);
        self.events
            .iter()
            .map(|e| Issue {
                cid: self.cid,
                file: normalize_path(&e.stripped_file_pathname).to_string(),
                line: e.line_number,
                checker: self.checker_name.clone(),
                classification,
                description: e.event_description.clone(),
            })
            .collect()
    }
}
