//! Raw report schemas for both scanner generations.
//!
//! - Legacy (`formatVersion` 1-6 or absent): `issueInfo` groups, each holding
//!   `occurrences` plus triage and baseline metadata.
//! - Current (`formatVersion` >= 7): flat `issues`, each holding `events`.
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! document is ignored.

use serde::Deserialize;
use serde_json::Value as Json;

/// First `formatVersion` that uses the flat `issues` layout.
pub const CURRENT_FORMAT_VERSION: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Schema generation selected from `formatVersion`.
pub enum Generation {
    Legacy,
    Current,
}

impl Generation {
    /// Detect the generation of a parsed report.
    ///
    /// Only an integral `formatVersion` of at least 7 selects `Current`.
    /// Missing, non-numeric, fractional or negative values fall back to
    /// `Legacy` so the decision is total over any input.
    pub fn detect(report: &Json) -> Self {
        let version = report.get("formatVersion").and_then(|v| {
            v.as_i64().or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as i64)
            })
        });
        match version {
            Some(v) if v >= CURRENT_FORMAT_VERSION => Generation::Current,
            _ => Generation::Legacy,
        }
    }
}

#[derive(Debug, Deserialize)]
/// Legacy report root.
pub struct LegacyReport {
    #[serde(rename = "issueInfo")]
    pub issue_info: Vec<LegacyGroup>,
}

#[derive(Debug, Deserialize)]
/// All occurrences of one CID in a legacy report.
pub struct LegacyGroup {
    pub cid: u64,
    #[serde(default)]
    pub triage: Triage,
    #[serde(rename = "presentInComparisonSnapshot", default)]
    pub present_in_comparison_snapshot: bool,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Default, Deserialize)]
/// Human triage state attached to a legacy group.
pub struct Triage {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Occurrence {
    pub checker: String,
    pub file: String,
    #[serde(rename = "mainEventLineNumber")]
    pub main_event_line_number: u64,
    #[serde(rename = "mainEventDescription")]
    pub main_event_description: String,
}

#[derive(Debug, Deserialize)]
/// Current (v7+) report root.
pub struct CurrentReport {
    pub issues: Vec<CurrentGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(try_from = "RawCurrentGroup")]
/// One v7 issue with its checker name resolved.
pub struct CurrentGroup {
    pub cid: u64,
    pub checker_name: String,
    pub stripped_main_event_file_pathname: String,
    pub events: Vec<Event>,
}

#[derive(Deserialize)]
/// v7 issue as exported. Exports spell the checker key `checker_name`,
/// `checkerName`, or both; the CID may be absent or null.
struct RawCurrentGroup {
    #[serde(default)]
    cid: Option<u64>,
    #[serde(default)]
    checker_name: Option<String>,
    #[serde(rename = "checkerName", default)]
    checker_name_camel: Option<String>,
    #[serde(rename = "strippedMainEventFilePathname")]
    stripped_main_event_file_pathname: String,
    #[serde(default)]
    events: Vec<Event>,
}

impl TryFrom<RawCurrentGroup> for CurrentGroup {
    type Error = String;

    fn try_from(raw: RawCurrentGroup) -> Result<Self, Self::Error> {
        let checker_name = raw
            .checker_name
            .or(raw.checker_name_camel)
            .ok_or_else(|| "missing field `checker_name` (or `checkerName`)".to_string())?;
        Ok(Self {
            cid: raw.cid.unwrap_or_default(),
            checker_name,
            stripped_main_event_file_pathname: raw.stripped_main_event_file_pathname,
            events: raw.events,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Event {
    #[serde(rename = "strippedFilePathname")]
    pub stripped_file_pathname: String,
    #[serde(rename = "lineNumber")]
    pub line_number: u64,
    #[serde(rename = "eventDescription")]
    pub event_description: String,
}

#[derive(Debug)]
/// A parsed report of either generation.
pub enum Report {
    Legacy(LegacyReport),
    Current(CurrentReport),
}

impl Report {
    /// Detect the generation and deserialize the matching schema.
    pub fn from_value(value: Json) -> Result<Self, serde_json::Error> {
        match Generation::detect(&value) {
            Generation::Current => serde_json::from_value(value).map(Report::Current),
            Generation::Legacy => serde_json::from_value(value).map(Report::Legacy),
        }
    }

    pub fn generation(&self) -> Generation {
        match self {
            Report::Legacy(_) => Generation::Legacy,
            Report::Current(_) => Generation::Current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_generation() {
        assert_eq!(Generation::detect(&json!({})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!({"formatVersion": 6})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!({"formatVersion": 7})), Generation::Current);
        assert_eq!(Generation::detect(&json!({"formatVersion": 9})), Generation::Current);
        assert_eq!(Generation::detect(&json!({"formatVersion": 7.0})), Generation::Current);
    }

    #[test]
    fn test_detect_generation_invalid_versions_are_legacy() {
        assert_eq!(Generation::detect(&json!({"formatVersion": "8"})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!({"formatVersion": -9})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!({"formatVersion": null})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!({"formatVersion": 7.5})), Generation::Legacy);
        assert_eq!(Generation::detect(&json!([1, 2])), Generation::Legacy);
    }

    #[test]
    fn test_from_value_requires_top_level_key() {
        assert!(Report::from_value(json!({"formatVersion": 7})).is_err());
        assert!(Report::from_value(json!({"issues": []})).is_err());
        let r = Report::from_value(json!({"issueInfo": []})).unwrap();
        assert_eq!(r.generation(), Generation::Legacy);
    }

    #[test]
    fn test_current_accepts_camel_case_checker_name() {
        let r = Report::from_value(json!({
            "formatVersion": 7,
            "issues": [{
                "cid": 3,
                "checkerName": "MISRA C-2012 Rule 9.1",
                "strippedMainEventFilePathname": "a.c",
                "events": []
            }]
        }))
        .unwrap();
        match r {
            Report::Current(c) => assert_eq!(c.issues[0].checker_name, "MISRA C-2012 Rule 9.1"),
            Report::Legacy(_) => panic!("expected current schema"),
        }
    }

    fn current_group(group: Json) -> Result<CurrentGroup, serde_json::Error> {
        let r = Report::from_value(json!({"formatVersion": 7, "issues": [group]}))?;
        match r {
            Report::Current(mut c) => Ok(c.issues.remove(0)),
            Report::Legacy(_) => panic!("expected current schema"),
        }
    }

    #[test]
    fn test_current_accepts_both_checker_keys() {
        let g = current_group(json!({
            "cid": 4,
            "checker_name": "MISRA C-2012 Rule 9.1",
            "checkerName": "MISRA C-2012 Rule 10.1",
            "strippedMainEventFilePathname": "a.c",
            "events": []
        }))
        .unwrap();
        assert_eq!(g.checker_name, "MISRA C-2012 Rule 9.1");
    }

    #[test]
    fn test_current_requires_some_checker_key() {
        let err = current_group(json!({
            "cid": 4,
            "strippedMainEventFilePathname": "a.c",
            "events": []
        }))
        .unwrap_err();
        assert!(err.to_string().contains("checker_name"));
    }

    #[test]
    fn test_current_null_or_missing_cid_is_zero() {
        let g = current_group(json!({
            "cid": null,
            "checker_name": "MISRA C-2012 Rule 9.1",
            "strippedMainEventFilePathname": "a.c"
        }))
        .unwrap();
        assert_eq!(g.cid, 0);
        let g = current_group(json!({
            "checker_name": "MISRA C-2012 Rule 9.1",
            "strippedMainEventFilePathname": "a.c"
        }))
        .unwrap();
        assert_eq!(g.cid, 0);
    }
}
