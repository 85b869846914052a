//! One module per subcommand.

pub mod check;
pub mod export;
pub mod list;
pub mod search;
pub mod show;

use raccourcis_core::{Library, Sheet};

use crate::error::CliError;

fn find_sheet<'a>(library: &'a Library, id: &str) -> Result<&'a Sheet, CliError> {
    library
        .get(id)
        .ok_or_else(|| CliError::UnknownSheet(id.to_string()))
}
