//! Report loading and the single traversal that yields records and totals.
//!
//! `IssueStream` owns a parsed report and is consumed by `into_outcome`, so a
//! report can be traversed only once and the totals always come back together
//! with the records they describe.

use crate::adapter::IssueGroup;
use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::models::report::{Generation, Report};
use crate::models::{ReportOutcome, Totals};
use crate::policy::FilterPolicy;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

/// Read and parse a report file, selecting the schema by `formatVersion`.
///
/// Invalid JSON and a missing top-level key for the detected schema are both
/// reported as `Error::Json`.
pub fn load_report(path: &Path) -> Result<Report> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a report held in memory.
pub fn parse_report(data: &str) -> std::result::Result<Report, serde_json::Error> {
    let value: Json = serde_json::from_str(data)?;
    Report::from_value(value)
}

/// Single-use traversal over one report.
#[derive(Debug)]
pub struct IssueStream {
    report: Report,
}

impl IssueStream {
    pub fn new(report: Report) -> Self {
        Self { report }
    }

    pub fn open(path: &Path) -> Result<Self> {
        load_report(path).map(Self::new)
    }

    pub fn generation(&self) -> Generation {
        self.report.generation()
    }

    /// Filter, classify and count every group, returning the kept records in
    /// report order together with the final totals.
    pub fn into_outcome(self, classifier: &Classifier, policy: &FilterPolicy) -> ReportOutcome {
        tracing::debug!(generation = ?self.generation(), "traversing report");
        match &self.report {
            Report::Legacy(r) => collect_groups(&r.issue_info, classifier, policy),
            Report::Current(r) => collect_groups(&r.issues, classifier, policy),
        }
    }
}

fn collect_groups<G: IssueGroup>(
    groups: &[G],
    classifier: &Classifier,
    policy: &FilterPolicy,
) -> ReportOutcome {
    let mut issues = Vec::new();
    let mut totals = Totals::default();
    for group in groups {
        if let Err(reason) = group.check(policy) {
            tracing::debug!(cid = group.cid(), reason = reason.as_str(), "dropping group");
            continue;
        }
        totals.record(classifier.classify(group.counted_checker()));
        issues.extend(group.records(classifier));
    }
    tracing::debug!(kept = totals.total, records = issues.len(), "traversal complete");
    ReportOutcome { issues, totals }
}
