//! Deterministic ordering of canonical records.

use crate::models::Issue;

/// String key ordering records by file, line, checker, then CID.
///
/// Numbers are zero-padded to five digits so that plain string comparison is
/// numeric-aware (line 2 before line 10). The key also identifies duplicate
/// `(file, line, checker, cid)` tuples.
pub fn sort_key(issue: &Issue) -> String {
    format!(
        "{}{:05}{}{:05}",
        issue.file, issue.line, issue.checker, issue.cid
    )
}

/// Stable sort by `sort_key`.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by_cached_key(sort_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;

    fn issue(file: &str, line: u64, checker: &str, cid: u64) -> Issue {
        Issue {
            cid,
            file: file.into(),
            line,
            checker: checker.into(),
            classification: Classification::Unknown,
            description: String::new(),
        }
    }

    #[test]
    fn test_key_layout() {
        assert_eq!(
            sort_key(&issue("a.c", 42, "Rule 9.1", 7)),
            "a.c00042Rule 9.100007"
        );
        // Padding is a minimum width
        assert_eq!(sort_key(&issue("a.c", 123456, "R", 1)), "a.c123456R00001");
    }

    #[test]
    fn test_line_ordering_is_numeric() {
        let mut v = vec![issue("a.c", 10, "R", 1), issue("a.c", 2, "R", 1)];
        sort_issues(&mut v);
        assert_eq!(v[0].line, 2);
        assert_eq!(v[1].line, 10);
    }

    #[test]
    fn test_file_then_checker_then_cid() {
        let mut v = vec![
            issue("b.c", 1, "A", 1),
            issue("a.c", 5, "B", 3),
            issue("a.c", 5, "B", 2),
            issue("a.c", 5, "A", 9),
        ];
        sort_issues(&mut v);
        let got: Vec<_> = v.iter().map(|i| (i.file.as_str(), i.checker.as_str(), i.cid)).collect();
        assert_eq!(
            got,
            vec![("a.c", "A", 9), ("a.c", "B", 2), ("a.c", "B", 3), ("b.c", "A", 1)]
        );
    }

    #[test]
    fn test_identical_tuples_share_a_key() {
        let mut a = issue("a.c", 5, "B", 3);
        let b = issue("a.c", 5, "B", 3);
        a.description = "different wording".into();
        assert_eq!(sort_key(&a), sort_key(&b));
    }
}
