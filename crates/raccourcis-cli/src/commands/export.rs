//! JSON export of resolved entries.
//!
//! Text fields are resolved for one language; categories follow manifest
//! order and empty ones are omitted.

use std::io::Write;

use raccourcis_core::{Entry, Lang, Library, Sheet};
use serde::Serialize;

use super::find_sheet;
use crate::error::CliError;
use crate::Outcome;

#[derive(Debug, Serialize)]
pub struct ExportedSheet<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub categories: Vec<ExportedCategory<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExportedCategory<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub entries: Vec<ExportedEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExportedEntry<'a> {
    pub label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'a str>,
}

impl<'a> ExportedEntry<'a> {
    fn new(entry: &'a Entry, lang: Lang) -> Self {
        Self {
            label: &entry.label,
            description: entry.description(lang),
            example: entry.example.as_deref(),
            mode: entry.mode.map(|m| m.as_str()),
            size: entry.size.as_deref(),
            range: entry.range(lang),
            header: entry.header.as_deref(),
            namespace: entry.namespace.as_deref(),
            module: entry.module.as_deref(),
            package: entry.package.as_deref(),
            group: entry.group.as_deref(),
        }
    }
}

impl<'a> ExportedSheet<'a> {
    pub fn new(sheet: &'a Sheet, lang: Lang) -> Self {
        let categories = sheet
            .search("", lang)
            .into_iter()
            .map(|group| ExportedCategory {
                id: &group.category.id,
                title: group.category.title.resolve(lang),
                entries: group
                    .entries
                    .into_iter()
                    .map(|entry| ExportedEntry::new(entry, lang))
                    .collect(),
            })
            .collect();
        Self {
            id: &sheet.id,
            title: sheet.title.resolve(lang),
            subtitle: sheet.subtitle.resolve(lang),
            categories,
        }
    }
}

/// Write one sheet as an object, or every sheet as an array.
pub fn run<W: Write>(
    out: &mut W,
    sheet: Option<&str>,
    lang: Lang,
    pretty: bool,
) -> Result<Outcome, CliError> {
    let library = Library::bundled()?;
    match sheet {
        Some(id) => {
            let exported = ExportedSheet::new(find_sheet(library, id)?, lang);
            write_json(out, &exported, pretty)?;
        }
        None => {
            let exported: Vec<_> = library
                .sheets()
                .iter()
                .map(|sheet| ExportedSheet::new(sheet, lang))
                .collect();
            write_json(out, &exported, pretty)?;
        }
    }
    writeln!(out)?;
    Ok(Outcome::Success)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(out, value)?;
    } else {
        serde_json::to_writer(out, value)?;
    }
    Ok(())
}
