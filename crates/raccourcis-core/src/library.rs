//! The content registry: every bundled sheet, in display order.

use std::sync::OnceLock;

use crate::error::ContentError;
use crate::lang::Lang;
use crate::sheet::Sheet;

/// Sheet documents compiled into the binary, in display order.
const BUNDLED_SHEETS: &[(&str, &str)] = &[
    ("vim", include_str!("../sheets/vim.toml")),
    ("terminal", include_str!("../sheets/terminal.toml")),
    ("c", include_str!("../sheets/c.toml")),
    ("cpp", include_str!("../sheets/cpp.toml")),
    ("java", include_str!("../sheets/java.toml")),
    ("python", include_str!("../sheets/python.toml")),
    ("csharp", include_str!("../sheets/csharp.toml")),
    ("assembly", include_str!("../sheets/assembly.toml")),
    ("makefiles", include_str!("../sheets/makefiles.toml")),
];

/// Number of matches for a query within one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetHits<'a> {
    pub sheet: &'a Sheet,
    pub count: usize,
}

/// Ordered, read-only collection of sheets with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    sheets: Vec<Sheet>,
}

impl Library {
    /// Build a library from already parsed sheets.
    pub fn new(sheets: Vec<Sheet>) -> Result<Self, ContentError> {
        for (i, sheet) in sheets.iter().enumerate() {
            if sheets[..i].iter().any(|s| s.id == sheet.id) {
                return Err(ContentError::DuplicateSheet(sheet.id.clone()));
            }
        }
        Ok(Self { sheets })
    }

    /// Parse `(name, toml)` pairs in order.
    pub fn from_sources<'s, I>(sources: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        let sheets = sources
            .into_iter()
            .map(|(name, source)| Sheet::from_toml(name, source))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sheets)
    }

    /// Parse the bundled sheets into a fresh library.
    pub fn load_bundled() -> Result<Self, ContentError> {
        let library = Self::from_sources(BUNDLED_SHEETS.iter().copied())?;
        log::debug!(
            "loaded {} sheets, {} entries",
            library.sheets.len(),
            library.entry_count()
        );
        Ok(library)
    }

    /// The bundled library, parsed on first use and shared afterwards.
    pub fn bundled() -> Result<&'static Library, ContentError> {
        static BUNDLED: OnceLock<Result<Library, ContentError>> = OnceLock::new();
        BUNDLED
            .get_or_init(Self::load_bundled)
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheets flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter().filter(|s| s.featured)
    }

    pub fn get(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn entry_count(&self) -> usize {
        self.sheets.iter().map(|s| s.entries.len()).sum()
    }

    /// Per-sheet match counts for a site-wide search.
    ///
    /// Sheets without matches are left out; an empty query counts every entry.
    pub fn search_all(&self, query: &str, lang: Lang) -> Vec<SheetHits<'_>> {
        self.sheets
            .iter()
            .map(|sheet| SheetHits {
                sheet,
                count: sheet.count_matches(query, lang),
            })
            .filter(|hits| hits.count > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: &str = r#"
id = "alpha"
title = "Alpha"
subtitle = "First"
icon = "terminal"
featured = true

[[categories]]
id = "basics"
title = "Basics"

[[entries]]
label = "ls"
category = "basics"
description = { en = "List files", fr = "Lister les fichiers" }

[[entries]]
label = "cd"
category = "basics"
description = { en = "Change directory", fr = "Changer de répertoire" }
"#;

    const BETA: &str = r#"
id = "beta"
title = "Beta"
subtitle = "Second"
icon = "cpu"

[[categories]]
id = "misc"
title = "Misc"

[[entries]]
label = "mov"
category = "misc"
description = { en = "Move data", fr = "Déplacer des données" }
"#;

    fn library() -> Library {
        Library::from_sources([("alpha", ALPHA), ("beta", BETA)]).unwrap()
    }

    #[test]
    fn test_order_and_lookup() {
        let library = library();
        let ids: Vec<_> = library.sheets().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta"]);
        assert_eq!(library.get("beta").map(|s| s.entries.len()), Some(1));
        assert!(library.get("gamma").is_none());
        assert_eq!(library.entry_count(), 3);
        assert_eq!(library.featured().count(), 1);
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let err = Library::from_sources([("alpha", ALPHA), ("again", ALPHA)]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSheet(id) if id == "alpha"));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = Library::from_sources([("alpha", ALPHA), ("bad", "[[entries]")]).unwrap_err();
        assert!(matches!(err, ContentError::Sheet { name, .. } if name == "bad"));
    }

    #[test]
    fn test_search_all_counts_per_sheet() {
        let library = library();
        let hits = library.search_all("dir", Lang::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sheet.id, "alpha");
        assert_eq!(hits[0].count, 1);

        let hits = library.search_all("", Lang::Fr);
        let counts: Vec<_> = hits.iter().map(|h| h.count).collect();
        assert_eq!(counts, [2, 1]);

        assert!(library.search_all("zzz", Lang::En).is_empty());
    }

    #[test]
    fn test_search_all_matches_whitespace_literally() {
        let library = library();
        let hits = library.search_all(" ", Lang::En);
        let counts: Vec<_> = hits.iter().map(|h| (h.sheet.id.as_str(), h.count)).collect();
        assert_eq!(counts, [("alpha", 2), ("beta", 1)]);
        assert!(library.search_all("  ", Lang::En).is_empty());
    }

    #[test]
    fn test_search_all_uses_language() {
        let library = library();
        let hits = library.search_all("déplacer", Lang::Fr);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sheet.id, "beta");
        assert!(library.search_all("déplacer", Lang::En).is_empty());
    }
}
