//! Completeness check over sheets and the translation table.
//!
//! Partial localization is allowed: single-language text fields are reported
//! as warnings unless the caller asks for a strict check.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::library::Library;
use crate::sheet::Sheet;
use crate::translate::TranslationTable;

/// Sheet and category ids end up in URL hashes.
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("slug pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Same label twice in one category.
    DuplicateEntry { label: String, category: String },
    /// Entry references a category missing from the manifest.
    UnknownCategory { label: String, category: String },
    DuplicateCategory { category: String },
    /// Manifest category with no entries.
    EmptyCategory { category: String },
    /// Id is not a lowercase URL slug.
    InvalidId { id: String },
    /// Text field authored in a single language.
    UntranslatedField { label: String, field: &'static str },
    /// Interface key absent from the translation table.
    MissingTranslation { key: String },
}

impl IssueKind {
    /// Severity in a non-strict check.
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyCategory { .. } | Self::UntranslatedField { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry { label, category } => {
                write!(f, "duplicate entry `{label}` in category `{category}`")
            }
            Self::UnknownCategory { label, category } => {
                write!(f, "entry `{label}` references unknown category `{category}`")
            }
            Self::DuplicateCategory { category } => {
                write!(f, "category `{category}` declared twice")
            }
            Self::EmptyCategory { category } => write!(f, "category `{category}` has no entries"),
            Self::InvalidId { id } => write!(f, "`{id}` is not a valid id"),
            Self::UntranslatedField { label, field } => {
                write!(f, "entry `{label}` has a single-language {field}")
            }
            Self::MissingTranslation { key } => write!(f, "no translation for key `{key}`"),
        }
    }
}

/// One finding, located by sheet id when it comes from a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub sheet: Option<String>,
    pub kind: IssueKind,
}

impl Issue {
    fn in_sheet(sheet: &Sheet, kind: IssueKind) -> Self {
        Self {
            sheet: Some(sheet.id.clone()),
            kind,
        }
    }

    /// Severity, with warnings promoted to errors when `strict`.
    pub fn severity(&self, strict: bool) -> Severity {
        if strict {
            Severity::Error
        } else {
            self.kind.severity()
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sheet {
            Some(sheet) => write!(f, "{sheet}: {}", self.kind),
            None => write!(f, "translations: {}", self.kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, severity: Severity, strict: bool) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity(strict) == severity)
            .count()
    }

    pub fn has_errors(&self, strict: bool) -> bool {
        self.count(Severity::Error, strict) > 0
    }

    pub fn merge(&mut self, other: Report) {
        self.issues.extend(other.issues);
    }
}

/// Check one sheet's manifest and entries.
pub fn validate_sheet(sheet: &Sheet) -> Report {
    let mut issues = Vec::new();

    if !SLUG.is_match(&sheet.id) {
        issues.push(Issue::in_sheet(sheet, IssueKind::InvalidId { id: sheet.id.clone() }));
    }

    let mut declared = HashSet::new();
    for category in &sheet.categories {
        if !SLUG.is_match(&category.id) {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::InvalidId {
                    id: category.id.clone(),
                },
            ));
        }
        if !declared.insert(category.id.as_str()) {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::DuplicateCategory {
                    category: category.id.clone(),
                },
            ));
        }
    }

    let mut seen = HashSet::new();
    for entry in &sheet.entries {
        if !declared.contains(entry.category.as_str()) {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::UnknownCategory {
                    label: entry.label.clone(),
                    category: entry.category.clone(),
                },
            ));
        }
        if !seen.insert((entry.category.as_str(), entry.label.as_str())) {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::DuplicateEntry {
                    label: entry.label.clone(),
                    category: entry.category.clone(),
                },
            ));
        }
        for field in entry.untranslated_fields() {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::UntranslatedField {
                    label: entry.label.clone(),
                    field,
                },
            ));
        }
    }

    let mut reported = HashSet::new();
    for category in &sheet.categories {
        let used = sheet.entries.iter().any(|e| e.category == category.id);
        if !used && reported.insert(category.id.as_str()) {
            issues.push(Issue::in_sheet(
                sheet,
                IssueKind::EmptyCategory {
                    category: category.id.clone(),
                },
            ));
        }
    }

    Report { issues }
}

/// Check that every key in `keys` has a translation.
pub fn validate_translations(table: &TranslationTable, keys: &[&str]) -> Report {
    let issues = keys
        .iter()
        .filter(|key| !table.contains(key))
        .map(|key| Issue {
            sheet: None,
            kind: IssueKind::MissingTranslation {
                key: key.to_string(),
            },
        })
        .collect();
    Report { issues }
}

/// Check every sheet, then the interface keys against `table`.
pub fn validate_library(library: &Library, table: &TranslationTable) -> Report {
    let mut report = Report::default();
    for sheet in library.sheets() {
        report.merge(validate_sheet(sheet));
    }
    report.merge(validate_translations(table, crate::keys::ALL));
    report
}
