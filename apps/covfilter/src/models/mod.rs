//! Canonical issue records, classifications, and per-class totals.

pub mod report;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity class of a MISRA checker.
pub enum Classification {
    Mandatory,
    Required,
    Advisory,
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Mandatory => "mandatory",
            Classification::Required => "required",
            Classification::Advisory => "advisory",
            Classification::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One reported event of a defect, normalized across schema generations.
pub struct Issue {
    pub cid: u64,
    /// Repository-relative; never starts with `/`.
    pub file: String,
    pub line: u64,
    pub checker: String,
    pub classification: Classification,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Defect-group counts, one increment per kept group.
pub struct Totals {
    pub total: usize,
    pub mandatory: usize,
    pub required: usize,
    pub advisory: usize,
    pub unknown: usize,
}

impl Totals {
    /// Count one kept group of the given class.
    pub fn record(&mut self, class: Classification) {
        self.total += 1;
        match class {
            Classification::Mandatory => self.mandatory += 1,
            Classification::Required => self.required += 1,
            Classification::Advisory => self.advisory += 1,
            Classification::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, class: Classification) -> usize {
        match class {
            Classification::Mandatory => self.mandatory,
            Classification::Required => self.required,
            Classification::Advisory => self.advisory,
            Classification::Unknown => self.unknown,
        }
    }

    /// Only the keys that were actually counted, e.g. `{"mandatory": 1, "total": 1}`.
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for class in [
            Classification::Mandatory,
            Classification::Required,
            Classification::Advisory,
            Classification::Unknown,
        ] {
            let n = self.get(class);
            if n > 0 {
                out.insert(class.as_str(), n);
            }
        }
        if self.total > 0 {
            out.insert("total", self.total);
        }
        out
    }
}

impl Serialize for Totals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_map().serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
/// Result of one full traversal: kept records and the totals that go with them.
pub struct ReportOutcome {
    pub issues: Vec<Issue>,
    pub totals: Totals,
}
