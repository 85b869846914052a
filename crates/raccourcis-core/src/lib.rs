//! Content registry, search and localization for the Raccourcis reference sheets.
//!
//! This crate has no browser dependency; both the web front-end and the CLI
//! build on it.
//!
//! - [`Library`], [`Sheet`], [`Entry`] - the bundled, read-only content registry
//! - [`filter`], [`filter_by`] - case-insensitive substring search
//! - [`group_by_category`], [`active_tab`] - manifest-ordered grouping
//! - [`Translator`], [`TranslationTable`], [`Lang`] - localization
//! - [`validate`] - completeness check over content and translations

pub mod error;
mod filter;
mod group;
pub mod keys;
mod lang;
mod library;
mod sheet;
mod text;
mod translate;
pub mod validate;

pub use error::{ContentError, ParseLangError};
pub use filter::{filter, filter_by, Query, Searchable};
pub use group::{active_tab, group_by_category, Categorized, Group};
pub use lang::{Lang, LangPolicy};
pub use library::{Library, SheetHits};
pub use sheet::{Category, CategoryView, Entry, Layout, Mode, Origin, Sheet};
pub use text::{Localized, Text};
pub use translate::{TranslationTable, Translator};
