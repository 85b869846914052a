use std::io::Write;

use raccourcis_core::{Lang, Library};

use super::find_sheet;
use crate::error::CliError;
use crate::render::{write_groups, write_sheet_heading};
use crate::Outcome;

pub fn run<W: Write>(out: &mut W, id: &str, lang: Lang, examples: bool) -> Result<Outcome, CliError> {
    let sheet = find_sheet(Library::bundled()?, id)?;
    write_sheet_heading(out, sheet, lang)?;
    write_groups(out, &sheet.search("", lang), lang, examples)?;
    Ok(Outcome::Success)
}
