//! `covfilter report`: resolve config, filter one report, print and write
//! results, and pick the exit code.

use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::stream::IssueStream;
use crate::{config, key, output, render, utils};
use std::fs;
use std::path::{Path, PathBuf};

/// Exit code when at least one defect is kept.
pub const EXIT_DEFECTS: i32 = 1;
/// Exit code for fatal errors (unreadable/malformed input, bad config, failed writes).
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug, Clone, Default)]
/// Inputs of one `covfilter report` run.
pub struct ReportArgs {
    pub json_report: PathBuf,
    pub show_all: bool,
    /// JSON array of the kept records.
    pub output: Option<PathBuf>,
    /// Flat totals text.
    pub totals: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub format: Option<String>,
    pub repo_root: Option<String>,
}

/// Run the report pipeline; `Ok(1)` when any defect is kept, `Ok(0)` otherwise.
///
/// Output files are written only after the report traversal succeeded, so a
/// fatal error never leaves partial outputs behind.
pub fn run_report(args: &ReportArgs) -> Result<i32> {
    let eff = config::resolve_effective(
        args.repo_root.as_deref(),
        args.format.as_deref(),
        if args.show_all { Some(true) } else { None },
    )?;
    if eff.output != "json" {
        if let Some(p) = eff.config_path.as_ref() {
            eprintln!("{} Using config {}", utils::info_prefix(), p.display());
        }
        if eff.show_all && !args.show_all {
            eprintln!(
                "{} show_all is set in config; listing issues present in the comparison snapshot too.",
                utils::note_prefix()
            );
        }
    }

    let classifier = Classifier::default();
    let policy = eff.filter_policy();
    let stream = IssueStream::open(&args.json_report)?;
    let mut outcome = stream.into_outcome(&classifier, &policy);
    key::sort_issues(&mut outcome.issues);

    output::print_report(&outcome.issues, &outcome.totals, &eff.output)?;

    if let Some(path) = args.output.as_deref() {
        write_file(path, &render::issues_json(&outcome.issues)?)?;
    }
    if let Some(path) = args.totals.as_deref() {
        write_file(path, &render::format_totals(&outcome.totals))?;
    }
    if let Some(path) = args.html.as_deref() {
        write_file(path, &render::render_html(&outcome.issues, &outcome.totals))?;
    }

    Ok(if outcome.issues.is_empty() { 0 } else { EXIT_DEFECTS })
}

/// Map a run result to the process exit code, printing fatal errors.
pub fn exit_code(res: Result<i32>) -> i32 {
    match res {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            EXIT_FATAL
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), bytes = contents.len(), "writing output");
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, Issue};
    use serde_json::json;
    use tempfile::tempdir;

    fn args_in(root: &Path, report: &str) -> ReportArgs {
        let path = root.join("misra.json");
        fs::write(&path, report).expect("write report");
        ReportArgs {
            json_report: path,
            output: Some(root.join("defects.json")),
            totals: Some(root.join("totals.txt")),
            html: Some(root.join("defects.html")),
            format: Some("json".into()),
            repo_root: root.to_str().map(str::to_string),
            ..ReportArgs::default()
        }
    }

    fn workspace() -> tempfile::TempDir {
        let td = tempdir().expect("tempdir");
        // Stop config discovery at the temp dir
        fs::create_dir(td.path().join(".git")).expect("mkdir .git");
        td
    }

    fn legacy_report() -> String {
        json!({
            "issueInfo": [
                {
                    "cid": 7,
                    "triage": {"action": "Undecided"},
                    "presentInComparisonSnapshot": false,
                    "occurrences": [
                        {
                            "checker": "MISRA C-2012 Rule 10.1",
                            "file": "/drivers/b.c",
                            "mainEventLineNumber": 10,
                            "mainEventDescription": "essential type mismatch"
                        },
                        {
                            "checker": "MISRA C-2012 Rule 9.1",
                            "file": "/drivers/b.c",
                            "mainEventLineNumber": 2,
                            "mainEventDescription": "uninitialized"
                        }
                    ]
                },
                {
                    "cid": 3,
                    "triage": {"action": "Undecided"},
                    "presentInComparisonSnapshot": false,
                    "occurrences": [
                        {
                            "checker": "MISRA C-2012 Rule 99.9",
                            "file": "/common/a.c",
                            "mainEventLineNumber": 5,
                            "mainEventDescription": "unknown rule"
                        }
                    ]
                }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_kept_defects_exit_one_and_write_outputs() {
        let td = workspace();
        let args = args_in(td.path(), &legacy_report());
        assert_eq!(exit_code(run_report(&args)), EXIT_DEFECTS);

        let dumped: Vec<Issue> =
            serde_json::from_str(&fs::read_to_string(td.path().join("defects.json")).unwrap())
                .unwrap();
        let order: Vec<_> = dumped.iter().map(|i| (i.file.as_str(), i.line)).collect();
        assert_eq!(order, vec![("common/a.c", 5), ("drivers/b.c", 2), ("drivers/b.c", 10)]);
        assert_eq!(dumped[0].classification, Classification::Unknown);
        assert_eq!(dumped[1].classification, Classification::Mandatory);
        assert_eq!(dumped[1].cid, 7);

        let totals = fs::read_to_string(td.path().join("totals.txt")).unwrap();
        assert_eq!(
            totals,
            "TotalDefects:     2\nMandatoryDefects: 0\nRequiredDefects:  1\nAdvisoryDefects:  0"
        );
        let html = fs::read_to_string(td.path().join("defects.html")).unwrap();
        assert_eq!(html.matches("<tr class=\"cov-").count(), 3);
    }

    #[test]
    fn test_no_kept_defects_exit_zero() {
        let td = workspace();
        let report = json!({
            "formatVersion": 7,
            "issues": [{
                "cid": 1,
                "checker_name": "Rule 2.4",
                "strippedMainEventFilePathname": "a.c",
                "events": [{"strippedFilePathname": "a.c", "lineNumber": 1, "eventDescription": "x"}]
            }]
        });
        let args = args_in(td.path(), &report.to_string());
        assert_eq!(exit_code(run_report(&args)), 0);
        assert_eq!(fs::read_to_string(td.path().join("defects.json")).unwrap(), "[]");
    }

    #[test]
    fn test_malformed_report_is_fatal_without_outputs() {
        let td = workspace();
        let args = args_in(td.path(), "{ \"issueInfo\": [");
        let res = run_report(&args);
        assert!(matches!(res, Err(Error::Json { .. })));
        assert_eq!(exit_code(res), EXIT_FATAL);
        assert!(!td.path().join("defects.json").exists());
        assert!(!td.path().join("totals.txt").exists());
        assert!(!td.path().join("defects.html").exists());
    }

    #[test]
    fn test_missing_schema_key_is_fatal() {
        let td = workspace();
        let args = args_in(td.path(), r#"{"formatVersion": 7, "issueInfo": []}"#);
        assert_eq!(exit_code(run_report(&args)), EXIT_FATAL);
        assert!(!td.path().join("defects.json").exists());
    }

    #[test]
    fn test_show_all_from_config() {
        let td = workspace();
        fs::write(td.path().join("covfilter.toml"), "show_all = true\n").unwrap();
        let report = json!({
            "issueInfo": [{
                "cid": 1,
                "triage": {"action": "Undecided"},
                "presentInComparisonSnapshot": true,
                "occurrences": [{
                    "checker": "MISRA C-2012 Rule 9.1",
                    "file": "a.c",
                    "mainEventLineNumber": 1,
                    "mainEventDescription": "x"
                }]
            }]
        });
        let mut args = args_in(td.path(), &report.to_string());
        args.format = Some("human".into());
        assert_eq!(exit_code(run_report(&args)), EXIT_DEFECTS);
    }
}
