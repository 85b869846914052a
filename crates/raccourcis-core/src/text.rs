//! Localizable text fields.

use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// An `{en, fr}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub fr: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
        }
    }

    /// The variant for `lang`.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Fr => &self.fr,
        }
    }
}

/// A content text field.
///
/// Authored either as a single string, shown unchanged in every language, or
/// as an `{ en = "...", fr = "..." }` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Plain(String),
    Localized(Localized),
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn localized(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self::Localized(Localized::new(en, fr))
    }

    /// Text to display for `lang`.
    ///
    /// Plain text has no language variants and is returned as authored.
    pub fn resolve(&self, lang: Lang) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(pair) => pair.get(lang),
        }
    }

    /// Whether the field carries a variant per language.
    pub fn is_localized(&self) -> bool {
        matches!(self, Self::Localized(_))
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
