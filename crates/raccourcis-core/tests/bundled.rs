//! Checks over the content compiled into the crate.

use raccourcis_core::validate::{validate_library, Severity};
use raccourcis_core::{active_tab, keys, Lang, Layout, Library, TranslationTable, Translator};

#[test]
fn test_bundled_sheets_parse() {
    let library = Library::bundled().unwrap();
    let ids: Vec<_> = library.sheets().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["vim", "terminal", "c", "cpp", "java", "python", "csharp", "assembly", "makefiles"]
    );
    assert!(library.sheets().iter().all(|s| !s.entries.is_empty()));
}

#[test]
fn test_bundled_featured_sheets() {
    let library = Library::bundled().unwrap();
    let ids: Vec<_> = library.featured().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["vim", "terminal", "c", "cpp", "java", "python", "makefiles"]);
}

#[test]
fn test_bundled_library_has_no_errors() {
    let library = Library::bundled().unwrap();
    let table = TranslationTable::bundled().unwrap();
    let report = validate_library(library, table);
    let errors: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.severity(false) == Severity::Error)
        .map(ToString::to_string)
        .collect();
    assert!(errors.is_empty(), "{errors:#?}");
}

#[test]
fn test_bundled_translations_cover_keys() {
    let table = TranslationTable::bundled().unwrap();
    for key in keys::ALL {
        assert!(table.contains(key), "missing `{key}`");
    }
    let unused: Vec<_> = table.keys().filter(|k| !keys::ALL.contains(k)).collect();
    assert!(unused.is_empty(), "unused keys: {unused:?}");
    let en = Translator::new(table, Lang::En);
    let fr = Translator::new(table, Lang::Fr);
    assert_eq!(en.translate(keys::NAV_LANGUAGE), "Language");
    assert_eq!(fr.translate(keys::NAV_LANGUAGE), "Langue");
}

#[test]
fn test_bundled_vim_search() {
    let vim = Library::bundled().unwrap().get("vim").unwrap();
    assert_eq!(vim.layout, Layout::Accordion);

    let all = vim.search("", Lang::En);
    assert_eq!(all.len(), vim.categories.len());

    let groups = vim.search("dd", Lang::En);
    assert!(groups
        .iter()
        .flat_map(|g| &g.entries)
        .any(|e| e.label == "dd"));
}

#[test]
fn test_bundled_tabs_keep_active_tab_valid() {
    let c = Library::bundled().unwrap().get("c").unwrap();
    assert_eq!(c.layout, Layout::Tabs);

    let groups = c.search("malloc", Lang::En);
    let tab = active_tab(&groups, Some("printf"));
    assert!(tab.is_some());
    assert!(groups.iter().any(|g| Some(g.category.id.as_str()) == tab));
}

#[test]
fn test_bundled_site_search() {
    let library = Library::bundled().unwrap();
    let hits = library.search_all("printf", Lang::Fr);
    assert!(hits.iter().any(|h| h.sheet.id == "c"));
    assert!(hits.iter().all(|h| h.count > 0));
}
