//! Plain renderings of records and totals for files and terminals.

use crate::models::{Classification, Issue, Totals};

fn class_suffix(issue: &Issue) -> String {
    match issue.classification {
        Classification::Unknown => String::new(),
        cls => format!(" ({})", cls),
    }
}

/// `<file>:<line>:[<checker> (<class>)]<<cid>> <description>`; the class
/// segment is omitted for unknown checkers.
pub fn format_issue(issue: &Issue) -> String {
    format!(
        "{}:{}:[{}{}]<{}> {}",
        issue.file,
        issue.line,
        issue.checker,
        class_suffix(issue),
        issue.cid,
        issue.description
    )
}

/// One `<tr>` styled by `cov-<class>`.
pub fn format_issue_html(issue: &Issue) -> String {
    format!(
        "<tr class=\"cov-{cls}\">\n  <td class=\"cov-file\">{file}</td>\n  <td class=\"cov-line\">{line}</td>\n  <td class=\"cov-checker\">{checker}{suffix}</td>\n  <td class=\"cov-cid\">{cid}</td>\n  <td class=\"cov-description\">{description}</td>\n</tr>",
        cls = issue.classification,
        file = escape_html(&issue.file),
        line = issue.line,
        checker = escape_html(&issue.checker),
        suffix = class_suffix(issue),
        cid = issue.cid,
        description = escape_html(&issue.description),
    )
}

/// Standalone page holding a summary list and one table row per record.
pub fn render_html(issues: &[Issue], totals: &Totals) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>MISRA defects</title>\n");
    out.push_str("</head>\n<body>\n");

    out.push_str("<h1>MISRA defects</h1>\n<ul>\n");
    for (label, n) in totals_lines(totals) {
        out.push_str(&format!("<li>{} {}</li>\n", label, n));
    }
    out.push_str("</ul>\n");

    out.push_str("<table class=\"cov\">\n");
    out.push_str("<thead><tr><th>File</th><th>Line</th><th>Checker</th><th>CID</th><th>Description</th></tr></thead>\n");
    out.push_str("<tbody>\n");
    for is in issues {
        out.push_str(&format_issue_html(is));
        out.push('\n');
    }
    out.push_str("</tbody></table>\n");
    out.push_str("</body>\n</html>\n");
    out
}

fn totals_lines(totals: &Totals) -> [(&'static str, usize); 4] {
    [
        ("TotalDefects:", totals.total),
        ("MandatoryDefects:", totals.mandatory),
        ("RequiredDefects:", totals.required),
        ("AdvisoryDefects:", totals.advisory),
    ]
}

/// Flat key/value totals, four lines, classes never seen render as 0.
pub fn format_totals(totals: &Totals) -> String {
    totals_lines(totals)
        .iter()
        .map(|(label, n)| format!("{:<18}{}", label, n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON array of records, in the order given.
pub fn issues_json(issues: &[Issue]) -> Result<String, serde_json::Error> {
    serde_json::to_string(issues)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
