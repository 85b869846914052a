use std::io::Write;

use raccourcis_core::{Lang, Library};

use crate::error::CliError;
use crate::Outcome;

pub fn run<W: Write>(out: &mut W, lang: Lang) -> Result<Outcome, CliError> {
    let library = Library::bundled()?;
    for sheet in library.sheets() {
        writeln!(
            out,
            "{:<10} {} ({} entries)",
            sheet.id,
            sheet.title.resolve(lang),
            sheet.entries.len()
        )?;
        for group in sheet.search("", lang) {
            writeln!(
                out,
                "    {:<12} {} ({})",
                group.category.id,
                group.category.title.resolve(lang),
                group.len()
            )?;
        }
    }
    Ok(Outcome::Success)
}
