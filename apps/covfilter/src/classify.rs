//! MISRA C:2012 rule classification.
//!
//! A checker name such as `"MISRA C-2012 Rule 9.1"` ends in `<kind> <number>`.
//! The kind selects an ordered list of `(classification, numbers)` tables and
//! the first table containing the number decides the class. Numbers are
//! compared as text, so `4.1` and `4.10` are distinct entries.
//!
//! The tables include MISRA C:2012 Amendment 1.

use crate::models::Classification;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const DIR_REQUIRED: &[&str] = &[
    "1.1", "2.1", "3.1", "4.1", "4.3", "4.7", "4.10", "4.11", "4.12", "4.14",
];

const DIR_ADVISORY: &[&str] = &["4.2", "4.4", "4.5", "4.6", "4.8", "4.9", "4.13"];

const RULE_MANDATORY: &[&str] = &[
    "9.1", "9.2", "9.3", "12.5", "13.6", "17.3", "17.4", "17.6", "19.1", "21.13", "21.17",
    "21.18", "21.19", "21.20", "22.2", "22.5", "22.6",
];

const RULE_REQUIRED: &[&str] = &[
    "1.1", "1.3", "2.1", "2.2", "3.1", "3.2", "4.1", "5.1", "5.2", "5.3", "5.4", "5.5", "5.6",
    "5.7", "5.8", "6.1", "6.2", "7.1", "7.2", "7.3", "7.4", "8.1", "8.2", "8.3", "8.4", "8.5",
    "8.6", "8.7", "8.8", "8.10", "8.12", "8.14", "9.2", "9.3", "9.4", "9.5", "10.1", "10.2",
    "10.3", "10.4", "10.6", "10.7", "10.8", "11.1", "11.2", "11.3", "11.6", "11.7", "11.8",
    "11.9", "12.2", "13.1", "13.2", "13.5", "14.1", "14.2", "14.3", "14.4", "15.2", "15.3",
    "15.6", "15.7", "16.1", "16.2", "16.3", "16.4", "16.5", "16.6", "16.7", "17.1", "17.2",
    "17.7", "18.1", "18.2", "18.3", "18.6", "18.7", "18.8", "20.3", "20.4", "20.6", "20.7",
    "20.8", "20.9", "20.11", "20.12", "20.13", "20.14", "21.1", "21.2", "21.3", "21.4", "21.5",
    "21.6", "21.7", "21.8", "21.9", "21.10", "21.11", "21.14", "21.15", "21.16", "22.1", "22.3",
    "22.4", "22.7", "22.8", "22.9", "22.10",
];

const RULE_ADVISORY: &[&str] = &[
    "1.2", "2.3", "2.4", "2.5", "2.6", "2.7", "4.2", "5.9", "8.9", "8.11", "8.13", "10.5",
    "11.4", "11.5", "12.1", "12.3", "12.4", "13.3", "13.4", "15.1", "15.4", "15.5", "17.5",
    "17.8", "18.4", "18.5", "19.2", "20.1", "20.2", "20.5", "20.10", "21.12",
];

/// Split the trailing `<kind> <number>` off a checker name.
///
/// `"MISRA C-2012 Rule 9.1"` gives `("Rule", "9.1")`; names without such a
/// tail give `None`.
pub fn rule_ref(checker: &str) -> Option<(&str, &str)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Literal pattern; compilation cannot fail.
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"(?P<kind>\w+) (?P<number>[\d.]+)$").unwrap());
    let caps = pattern.captures(checker)?;
    let kind = caps.name("kind")?.as_str();
    let number = caps.name("number")?.as_str();
    Some((kind, number))
}

/// One classification table: a label and the rule numbers it covers.
#[derive(Debug, Clone)]
pub struct ClassTable {
    pub class: Classification,
    pub numbers: HashSet<String>,
}

impl ClassTable {
    fn new(class: Classification, numbers: &[&str]) -> Self {
        Self {
            class,
            numbers: numbers.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Rule-number tables per checker kind, in priority order.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub directive: Vec<ClassTable>,
    pub rule: Vec<ClassTable>,
}

impl Taxonomy {
    /// MISRA C:2012 with Amendment 1.
    pub fn misra_c_2012() -> Self {
        Self {
            directive: vec![
                ClassTable::new(Classification::Required, DIR_REQUIRED),
                ClassTable::new(Classification::Advisory, DIR_ADVISORY),
            ],
            rule: vec![
                ClassTable::new(Classification::Mandatory, RULE_MANDATORY),
                ClassTable::new(Classification::Required, RULE_REQUIRED),
                ClassTable::new(Classification::Advisory, RULE_ADVISORY),
            ],
        }
    }

    fn tables_for(&self, kind: &str) -> Option<&[ClassTable]> {
        match kind {
            "Directive" => Some(self.directive.as_slice()),
            "Rule" => Some(self.rule.as_slice()),
            _ => None,
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::misra_c_2012()
    }
}

/// Maps checker names to classifications.
#[derive(Debug, Clone)]
pub struct Classifier {
    taxonomy: Taxonomy,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn classify(&self, checker: &str) -> Classification {
        let Some((kind, number)) = rule_ref(checker) else {
            return Classification::Unknown;
        };
        self.taxonomy
            .tables_for(kind)
            .and_then(|tables| tables.iter().find(|t| t.numbers.contains(number)))
            .map(|t| t.class)
            .unwrap_or(Classification::Unknown)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}
