//! Terminal output for `covfilter report` and `covfilter classify`.
//!
//! Supports `human` (default) and `json`. Human mode prints one text line per
//! record on stdout and a summary on stderr, so stdout stays a clean list of
//! defects for scripts.

use crate::models::{Classification, Issue, Totals};
use crate::render::format_issue;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn paint(line: &str, cls: Classification) -> String {
    match cls {
        Classification::Mandatory => line.red().bold().to_string(),
        Classification::Required => line.yellow().to_string(),
        Classification::Advisory => line.blue().to_string(),
        Classification::Unknown => line.to_string(),
    }
}

/// Print sorted records and their totals in the requested format.
pub fn print_report(issues: &[Issue], totals: &Totals, output: &str) -> Result<(), serde_json::Error> {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(issues, totals)?)?
        ),
        _ => {
            let color = use_colors(output);
            for is in issues {
                let line = format_issue(is);
                if color {
                    println!("{}", paint(&line, is.classification));
                } else {
                    println!("{}", line);
                }
            }
            let summary = format!(
                "— Summary — total={} mandatory={} required={} advisory={} records={}",
                totals.total,
                totals.mandatory,
                totals.required,
                totals.advisory,
                issues.len()
            );
            if color {
                eprintln!("{}", summary.bold());
            } else {
                eprintln!("{}", summary);
            }
        }
    }
    Ok(())
}

/// Print one classification per checker argument.
pub fn print_classifications(rows: &[(String, Classification)], output: &str) -> Result<(), serde_json::Error> {
    match output {
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|(checker, cls)| json!({"checker": checker, "classification": cls}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        _ => {
            let color = use_colors(output);
            for (checker, cls) in rows {
                if color {
                    println!("{}\t{}", checker, paint(cls.as_str(), *cls));
                } else {
                    println!("{}\t{}", checker, cls);
                }
            }
        }
    }
    Ok(())
}

/// Compose report JSON (pure) for testing/snapshot purposes.
pub fn compose_report_json(issues: &[Issue], totals: &Totals) -> Result<JsonVal, serde_json::Error> {
    Ok(json!({
        "issues": serde_json::to_value(issues)?,
        "totals": serde_json::to_value(totals)?,
    }))
}
