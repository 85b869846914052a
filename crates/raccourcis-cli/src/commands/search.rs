use std::io::Write;

use raccourcis_core::{Lang, Library, Sheet};

use super::find_sheet;
use crate::error::CliError;
use crate::render::{write_groups, write_sheet_heading};
use crate::Outcome;

/// Print grouped matches for one sheet or all of them.
///
/// Finding nothing is not an error.
pub fn run<W: Write>(
    out: &mut W,
    query: &str,
    sheet: Option<&str>,
    lang: Lang,
    examples: bool,
) -> Result<Outcome, CliError> {
    let library = Library::bundled()?;
    let sheets: Vec<&Sheet> = match sheet {
        Some(id) => vec![find_sheet(library, id)?],
        None => library.sheets().iter().collect(),
    };

    let mut total = 0;
    for sheet in sheets {
        let groups = sheet.search(query, lang);
        if groups.is_empty() {
            continue;
        }
        if total > 0 {
            writeln!(out)?;
        }
        total += groups.iter().map(|g| g.len()).sum::<usize>();
        write_sheet_heading(out, sheet, lang)?;
        write_groups(out, &groups, lang, examples)?;
    }

    log::debug!("{total} matches for `{query}`");
    if total == 0 {
        writeln!(out, "No match for \"{query}\".")?;
    }
    Ok(Outcome::Success)
}
