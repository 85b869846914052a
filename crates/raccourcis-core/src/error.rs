//! Error types for loading bundled content.
//!
//! - [`ContentError`] - malformed sheet or translation data
//! - [`ParseLangError`] - unsupported language code

use thiserror::Error;

/// Errors raised while loading the content registry.
///
/// Only malformed data files can produce these; searching, grouping and
/// translating never fail.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// A sheet document is not valid TOML or does not match the sheet schema.
    #[error("failed to parse sheet `{name}`: {source}")]
    Sheet {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    /// The translation table is not valid TOML or has malformed entries.
    #[error("failed to parse translation table: {0}")]
    Translations(#[source] toml::de::Error),

    /// Two sheets share the same id.
    #[error("duplicate sheet id `{0}`")]
    DuplicateSheet(String),
}

/// Unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{0}` (expected `en` or `fr`)")]
pub struct ParseLangError(pub String);
