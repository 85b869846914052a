//! Key-based translation of interface strings.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::lang::Lang;
use crate::text::{Localized, Text};

const BUNDLED_TRANSLATIONS: &str = include_str!("../i18n.toml");

/// Flat `key -> {en, fr}` lookup for interface strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    mapping: BTreeMap<String, Localized>,
}

impl TranslationTable {
    pub const fn new() -> Self {
        Self {
            mapping: BTreeMap::new(),
        }
    }

    /// Parse a table from a TOML document of `"key" = { en = "..", fr = ".." }` lines.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(ContentError::Translations)
    }

    /// The table embedded in the binary, parsed on first use.
    pub fn bundled() -> Result<&'static TranslationTable, ContentError> {
        static BUNDLED: OnceLock<Result<TranslationTable, ContentError>> = OnceLock::new();
        BUNDLED
            .get_or_init(|| Self::from_toml(BUNDLED_TRANSLATIONS))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Add or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, en: impl Into<String>, fr: impl Into<String>) {
        self.mapping.insert(key.into(), Localized::new(en, fr));
    }

    pub fn get(&self, key: &str) -> Option<&Localized> {
        self.mapping.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Resolves keys and text fields for one language.
///
/// Built from an explicit table and language; holds no global state.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    lang: Lang,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable, lang: Lang) -> Self {
        Self { table, lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Same table, another language.
    pub fn with_lang(self, lang: Lang) -> Self {
        Self { lang, ..self }
    }

    /// Translate `key`, returning the key itself when the table lacks it.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        match self.table.get(key) {
            Some(pair) => pair.get(self.lang),
            None => {
                log::trace!("no translation for key `{key}`, using the key");
                key
            }
        }
    }

    /// Resolve a content field for the current language.
    pub fn resolve<'t>(&self, text: &'t Text) -> &'t str {
        text.resolve(self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert("nav.language", "Language", "Langue");
        table.insert("nav.vim", "Vim", "Vim");
        table
    }

    #[test]
    fn test_translate_present_key() {
        let table = table();
        let fr = Translator::new(&table, Lang::Fr);
        assert_eq!(fr.translate("nav.language"), "Langue");
        assert_eq!(fr.with_lang(Lang::En).translate("nav.language"), "Language");
    }

    #[test]
    fn test_translate_variants_differ_by_language() {
        let table = table();
        let en = Translator::new(&table, Lang::En).translate("nav.language");
        let fr = Translator::new(&table, Lang::Fr).translate("nav.language");
        assert_ne!(en, fr);
    }

    #[test]
    fn test_translate_missing_key_falls_back_to_key() {
        let table = table();
        for lang in Lang::ALL {
            let t = Translator::new(&table, lang);
            assert_eq!(t.translate("unknown.key"), "unknown.key");
            assert_eq!(t.translate(""), "");
        }
    }

    #[test]
    fn test_translate_on_empty_table() {
        let table = TranslationTable::new();
        assert!(table.is_empty());
        assert_eq!(
            Translator::new(&table, Lang::En).translate("nav.home"),
            "nav.home"
        );
    }

    #[test]
    fn test_resolve_text() {
        let table = TranslationTable::new();
        let t = Translator::new(&table, Lang::En);
        assert_eq!(t.resolve(&Text::localized("Undo", "Annuler")), "Undo");
        assert_eq!(t.resolve(&Text::plain("Annuler")), "Annuler");
    }

    #[test]
    fn test_from_toml() {
        let table = TranslationTable::from_toml(
            r#"
            "nav.language" = { en = "Language", fr = "Langue" }
            "nav.home" = { en = "Home", fr = "Accueil" }
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().collect::<Vec<_>>(), ["nav.home", "nav.language"]);
    }

    #[test]
    fn test_from_toml_rejects_half_pairs() {
        let result = TranslationTable::from_toml(r#""nav.home" = { en = "Home" }"#);
        assert!(matches!(result, Err(ContentError::Translations(_))));
    }
}
