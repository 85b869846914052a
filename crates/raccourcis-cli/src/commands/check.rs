use std::io::Write;

use raccourcis_core::validate::{validate_library, Severity};
use raccourcis_core::{Library, TranslationTable};

use crate::error::CliError;
use crate::Outcome;

pub fn run<W: Write>(out: &mut W, strict: bool) -> Result<Outcome, CliError> {
    let library = Library::bundled()?;
    let table = TranslationTable::bundled()?;
    let report = validate_library(library, table);

    for issue in &report.issues {
        writeln!(out, "{}: {issue}", issue.severity(strict))?;
    }
    let errors = report.count(Severity::Error, strict);
    let warnings = report.count(Severity::Warning, strict);
    writeln!(
        out,
        "checked {} sheets, {} entries, {} keys: {errors} errors, {warnings} warnings",
        library.sheets().len(),
        library.entry_count(),
        table.len()
    )?;

    if report.has_errors(strict) {
        Ok(Outcome::Failure)
    } else {
        Ok(Outcome::Success)
    }
}
