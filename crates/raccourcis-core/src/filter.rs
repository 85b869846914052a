//! Case-insensitive substring search over content items.
//!
//! Matching folds both sides the same way: NFC normalization, then Unicode
//! uppercase followed by lowercase, so expanding mappings ("ß" and "SS")
//! compare equal. No locale-specific rules apply.

use unicode_normalization::UnicodeNormalization;

use crate::lang::Lang;

/// Fold text for comparison.
fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_uppercase().to_lowercase()
}

/// A folded search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    folded: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            folded: fold(raw),
        }
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Whether `field` contains the query.
    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || fold(field).contains(&self.folded)
    }

    /// Whether any of `fields` contains the query.
    pub fn matches_any<I, S>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_empty() || fields.into_iter().any(|f| self.matches(f.as_ref()))
    }
}

/// Items that expose text fields to search.
pub trait Searchable {
    /// Searchable strings, resolved for `lang`.
    fn search_fields(&self, lang: Lang) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self, lang: Lang) -> Vec<&str> {
        (**self).search_fields(lang)
    }
}

/// Keep items with at least one field containing `query`.
///
/// Relative order is preserved. An empty query keeps every item.
pub fn filter_by<'a, T, F, I, S>(items: &'a [T], query: &str, fields_of: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let query = Query::new(query);
    if query.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| query.matches_any(fields_of(*item)))
        .collect()
}

/// [`filter_by`] over the item's [`Searchable`] fields.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, lang: Lang) -> Vec<&'a T> {
    filter_by(items, query, |item| item.search_fields(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Entry;
    use crate::text::Text;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("mov", "movement")
                .with_description(Text::localized("Move cursor left", "Déplacer le curseur")),
            Entry::new("dd", "editing")
                .with_description(Text::localized("Delete line", "Supprimer la ligne")),
            Entry::new("cw", "editing")
                .with_description(Text::localized("Change word", "Mode édition du mot")),
        ]
    }

    fn labels(items: &[&Entry]) -> Vec<String> {
        items.iter().map(|e| e.label.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let entries = entries();
        let all = filter(&entries, "", Lang::En);
        assert_eq!(labels(&all), ["mov", "dd", "cw"]);
    }

    #[test]
    fn test_description_match_is_case_folded() {
        let entries = entries();
        let result = filter(&entries, "MOVE", Lang::En);
        assert_eq!(labels(&result), ["mov"]);
    }

    #[test]
    fn test_no_match() {
        let entries = entries();
        assert!(filter(&entries, "zzz", Lang::En).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let entries = entries();
        let result = filter(&entries, "e", Lang::En);
        assert_eq!(labels(&result), ["mov", "dd", "cw"]);
    }

    #[test]
    fn test_longer_query_narrows() {
        let entries = entries();
        for (short, long) in [("d", "de"), ("de", "del"), ("l", "line")] {
            let wide = filter(&entries, short, Lang::En);
            let narrow = filter(&entries, long, Lang::En);
            assert!(narrow.len() <= wide.len());
            assert!(narrow.iter().all(|e| wide.contains(e)));
        }
    }

    #[test]
    fn test_unicode_case_folding() {
        let entries = entries();
        let result = filter(&entries, "ÉDITION", Lang::Fr);
        assert_eq!(labels(&result), ["cw"]);
    }

    #[test]
    fn test_query_case_does_not_change_result() {
        let entries = vec![
            Entry::new("Straße", "words"),
            Entry::new("Édition", "words"),
            Entry::new("İstanbul", "words"),
            Entry::new("mov", "words"),
        ];
        for query in ["straße", "STRASSE", "édition", "İstanbul", "ISTANBUL", "Mov", "t"] {
            let as_is = labels(&filter(&entries, query, Lang::En));
            let upper = labels(&filter(&entries, &query.to_uppercase(), Lang::En));
            let lower = labels(&filter(&entries, &query.to_lowercase(), Lang::En));
            assert_eq!(as_is, upper, "{query}");
            assert_eq!(as_is, lower, "{query}");
        }
        assert_eq!(labels(&filter(&entries, "STRASSE", Lang::En)), ["Straße"]);
        assert_eq!(labels(&filter(&entries, "straße", Lang::En)), ["Straße"]);
    }

    #[test]
    fn test_decomposed_query_matches_composed_text() {
        let entries = entries();
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        let result = filter(&entries, "e\u{301}dition", Lang::Fr);
        assert_eq!(labels(&result), ["cw"]);
    }

    #[test]
    fn test_filter_by_custom_fields() {
        let words = ["Alpha", "beta", "GAMMA"];
        let result = filter_by(&words, "a", |w| [*w]);
        assert_eq!(result, [&"Alpha", &"beta", &"GAMMA"]);
        let result = filter_by(&words, "gam", |w| [*w]);
        assert_eq!(result, [&"GAMMA"]);
    }

    #[test]
    fn test_query_matches_any() {
        let query = Query::new("Curseur");
        assert_eq!(query.as_str(), "curseur");
        assert!(query.matches_any(["x", "Déplacer le curseur"]));
        assert!(!query.matches_any(Vec::<&str>::new()));
        assert!(Query::new("").matches_any(Vec::<&str>::new()));
    }
}
