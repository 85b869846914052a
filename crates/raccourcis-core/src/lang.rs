//! Display languages and the initial-language policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLangError;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English
    En,
    /// French (site default)
    #[default]
    Fr,
}

impl Lang {
    /// Every supported language, in selector order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    /// Two-letter code (`"en"`, `"fr"`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Language name written in that language, for the selector.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Parse a language tag by its primary subtag.
    ///
    /// Accepts BCP 47 tags (`fr-FR`), POSIX locales (`en_US.UTF-8`) and bare
    /// codes in any case. Returns `None` for unsupported languages.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseLangError(s.to_string()))
    }
}

/// Deterministic initial-language policy.
///
/// Precedence, highest first:
/// 1. `explicit` (configuration or command-line flag)
/// 2. a previously stored user choice
/// 3. the first supported browser/environment language
/// 4. `fallback`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangPolicy {
    pub explicit: Option<Lang>,
    pub fallback: Lang,
}

impl LangPolicy {
    pub const fn new(explicit: Option<Lang>, fallback: Lang) -> Self {
        Self { explicit, fallback }
    }

    /// Resolve the language to start with.
    ///
    /// Unparseable stored values and unsupported candidates are skipped.
    pub fn resolve<'a, I>(&self, stored: Option<&str>, candidates: I) -> Lang
    where
        I: IntoIterator<Item = &'a str>,
    {
        if let Some(lang) = self.explicit {
            return lang;
        }
        if let Some(lang) = stored.and_then(Lang::from_tag) {
            return lang;
        }
        candidates
            .into_iter()
            .find_map(Lang::from_tag)
            .unwrap_or(self.fallback)
    }
}

impl Default for LangPolicy {
    fn default() -> Self {
        Self::new(None, Lang::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Lang::from_tag("fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("FR"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("fr-FR"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("fr-CA"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("en_US.UTF-8"), Some(Lang::En));
        assert_eq!(Lang::from_tag(" en-gb "), Some(Lang::En));
        assert_eq!(Lang::from_tag("de"), None);
        assert_eq!(Lang::from_tag(""), None);
        assert_eq!(Lang::from_tag("C"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!(
            "es".parse::<Lang>(),
            Err(ParseLangError("es".to_string()))
        );
    }

    #[test]
    fn test_display_matches_code() {
        for lang in Lang::ALL {
            assert_eq!(lang.to_string(), lang.code());
        }
    }

    #[test]
    fn test_policy_explicit_wins() {
        let policy = LangPolicy::new(Some(Lang::En), Lang::Fr);
        assert_eq!(policy.resolve(Some("fr"), ["fr-FR"]), Lang::En);
    }

    #[test]
    fn test_policy_stored_before_browser() {
        let policy = LangPolicy::default();
        assert_eq!(policy.resolve(Some("en"), ["fr-FR"]), Lang::En);
    }

    #[test]
    fn test_policy_first_supported_browser_language() {
        let policy = LangPolicy::default();
        assert_eq!(policy.resolve(None, ["de-DE", "en-US", "fr"]), Lang::En);
        // Garbage in storage is ignored
        assert_eq!(policy.resolve(Some("klingon"), ["en-US"]), Lang::En);
    }

    #[test]
    fn test_policy_fallback() {
        let policy = LangPolicy::new(None, Lang::Fr);
        assert_eq!(policy.resolve(None, ["de", "ja"]), Lang::Fr);
        assert_eq!(policy.resolve(None, std::iter::empty()), Lang::Fr);
    }
}
