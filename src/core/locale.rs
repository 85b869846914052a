//! Display language state and its persistence.

use leptos::prelude::*;
use raccourcis_core::{Lang, LangPolicy, Text, TranslationTable, Translator};

use crate::config::{FALLBACK_LANG, FORCED_LANG, LANG_STORAGE_KEY};
use crate::core::error::LocaleStorageError;
use crate::utils::dom;

/// Read the stored language choice, if any.
pub fn load_stored_lang() -> Option<String> {
    dom::local_storage()?.get_item(LANG_STORAGE_KEY).ok()?
}

/// Persist the language choice.
pub fn store_lang(lang: Lang) -> Result<(), LocaleStorageError> {
    let storage = dom::local_storage().ok_or(LocaleStorageError::StorageUnavailable)?;
    storage
        .set_item(LANG_STORAGE_KEY, lang.code())
        .map_err(|_| LocaleStorageError::SaveFailed)
}

/// Current display language plus the table to translate with.
///
/// `Copy` like the signals it wraps; handed to components as a prop.
#[derive(Clone, Copy)]
pub struct Locale {
    lang: RwSignal<Lang>,
    table: &'static TranslationTable,
}

impl Locale {
    /// Pick the initial language: configured, stored, browser, fallback.
    pub fn init(table: &'static TranslationTable) -> Self {
        let policy = LangPolicy::new(FORCED_LANG, FALLBACK_LANG);
        let stored = load_stored_lang();
        let browser = dom::navigator_languages();
        let lang = policy.resolve(stored.as_deref(), browser.iter().map(String::as_str));
        Self {
            lang: RwSignal::new(lang),
            table,
        }
    }

    /// Current language (tracked).
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    /// Switch language and remember the choice.
    ///
    /// Storage failures only lose persistence; the switch still applies.
    pub fn set(&self, lang: Lang) {
        self.lang.set(lang);
        if let Err(err) = store_lang(lang) {
            web_sys::console::warn_1(&format!("language not saved: {err}").into());
        }
    }

    /// Translator for the current language (tracked).
    pub fn translator(&self) -> Translator<'static> {
        Translator::new(self.table, self.lang())
    }

    /// Translate an interface key (tracked).
    pub fn t(&self, key: &'static str) -> &'static str {
        self.translator().translate(key)
    }

    /// Resolve a content field (tracked).
    pub fn text(&self, text: &'static Text) -> &'static str {
        text.resolve(self.lang())
    }
}
