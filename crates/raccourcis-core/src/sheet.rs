//! Reference sheets: category manifest and entries.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::filter::{filter, Searchable};
use crate::group::{group_by_category, Categorized, Group};
use crate::lang::Lang;
use crate::text::Text;

// ============================================================================
// Entry
// ============================================================================

/// Vim editing mode an entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normal,
    Insert,
    Visual,
    Command,
    Multiple,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Insert => "insert",
            Self::Visual => "visual",
            Self::Command => "command",
            Self::Multiple => "multiple",
        }
    }
}

/// Where a function-reference entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    /// C header (`stdio.h`)
    Header(&'a str),
    /// .NET namespace (`System.IO`)
    Namespace(&'a str),
    /// Python module (`os.path`)
    Module(&'a str),
    /// Java package (`java.util`)
    Package(&'a str),
}

impl<'a> Origin<'a> {
    pub fn name(self) -> &'a str {
        match self {
            Self::Header(name) | Self::Namespace(name) | Self::Module(name) | Self::Package(name) => {
                name
            }
        }
    }
}

/// One row of cheat-sheet content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    /// Command, specifier, type or function name.
    pub label: String,
    /// Id of the manifest category this entry belongs to.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
    /// Literal code or command sample; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Free-form sub-grouping shown as a badge (instruction family, section).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Entry {
    /// Minimal entry with only a label and category.
    pub fn new(label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: category.into(),
            description: None,
            example: None,
            mode: None,
            size: None,
            range: None,
            header: None,
            namespace: None,
            module: None,
            package: None,
            group: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<Text>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn description(&self, lang: Lang) -> Option<&str> {
        self.description.as_ref().map(|d| d.resolve(lang))
    }

    pub fn range(&self, lang: Lang) -> Option<&str> {
        self.range.as_ref().map(|r| r.resolve(lang))
    }

    /// Header, namespace, module or package, whichever is set first.
    pub fn origin(&self) -> Option<Origin<'_>> {
        self.header
            .as_deref()
            .map(Origin::Header)
            .or_else(|| self.namespace.as_deref().map(Origin::Namespace))
            .or_else(|| self.module.as_deref().map(Origin::Module))
            .or_else(|| self.package.as_deref().map(Origin::Package))
    }

    /// Text fields authored in a single language, by field name.
    pub fn untranslated_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.description.as_ref().is_some_and(|d| !d.is_localized()) {
            fields.push("description");
        }
        if self.range.as_ref().is_some_and(|r| !r.is_localized()) {
            fields.push("range");
        }
        fields
    }
}

impl Searchable for Entry {
    fn search_fields(&self, lang: Lang) -> Vec<&str> {
        let mut fields = vec![self.label.as_str()];
        fields.extend(self.description(lang));
        fields.extend(self.example.as_deref());
        fields.extend(self.range(lang));
        fields.extend(
            [
                &self.header,
                &self.namespace,
                &self.module,
                &self.package,
                &self.group,
            ]
            .into_iter()
            .filter_map(|field| field.as_deref()),
        );
        fields
    }
}

impl Categorized for Entry {
    fn category_id(&self) -> &str {
        &self.category
    }
}

// ============================================================================
// Category manifest
// ============================================================================

/// How a category renders its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryView {
    /// Grid of cards (default)
    #[default]
    Cards,
    /// Table with type/size/range/example columns
    Table,
}

/// One element of a sheet's ordered category manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub title: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub view: CategoryView,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<Text>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            view: CategoryView::default(),
        }
    }
}

// ============================================================================
// Sheet
// ============================================================================

/// How a sheet page lays out its categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Collapsible sections, one open at a time
    #[default]
    Accordion,
    /// One tab per category
    Tabs,
}

/// A reference page: its manifest and its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sheet {
    pub id: String,
    pub title: Text,
    pub subtitle: Text,
    /// Icon name understood by the front-end.
    pub icon: String,
    #[serde(default)]
    pub layout: Layout,
    /// Language tag for code examples (`c`, `bash`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Sheet {
    /// Parse one sheet document. `name` is only used in error messages.
    pub fn from_toml(name: &str, source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(|source| ContentError::Sheet {
            name: name.to_string(),
            source,
        })
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Entries matching `query`, grouped in manifest order.
    ///
    /// Categories without matches are left out.
    pub fn search(&self, query: &str, lang: Lang) -> Vec<Group<'_, Entry>> {
        group_by_category(&self.categories, filter(&self.entries, query, lang))
    }

    /// Number of entries matching `query`.
    pub fn count_matches(&self, query: &str, lang: Lang) -> usize {
        filter(&self.entries, query, lang).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIM: &str = r#"
id = "vim"
title = { en = "Vim Commands", fr = "Commandes Vim" }
subtitle = "Une référence complète des commandes et raccourcis Vim"
icon = "terminal"

[[categories]]
id = "movement"
title = { en = "Movement", fr = "Déplacement" }

[[categories]]
id = "editing"
title = { en = "Editing", fr = "Édition" }

[[categories]]
id = "visual"
title = "Mode Visuel"

[[entries]]
label = "h"
category = "movement"
description = { en = "Move cursor left", fr = "Déplacer le curseur vers la gauche" }
mode = "normal"

[[entries]]
label = "dd"
category = "editing"
description = { en = "Delete line", fr = "Supprimer la ligne" }
mode = "normal"

[[entries]]
label = "w"
category = "movement"
description = { en = "Move to next word", fr = "Aller au début du mot suivant" }
mode = "normal"
"#;

    fn vim() -> Sheet {
        Sheet::from_toml("vim", VIM).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let sheet = vim();
        assert_eq!(sheet.layout, Layout::Accordion);
        assert!(!sheet.featured);
        assert_eq!(sheet.syntax, None);
        assert_eq!(sheet.categories[0].view, CategoryView::Cards);
        assert_eq!(sheet.entries.len(), 3);
        assert_eq!(sheet.entries[0].mode, Some(Mode::Normal));
    }

    #[test]
    fn test_parse_error_names_sheet() {
        let err = Sheet::from_toml("broken", "id = ").unwrap_err();
        assert!(err.to_string().contains("`broken`"));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let source = VIM.replace("mode = \"normal\"\n\n[[entries]]\nlabel = \"w\"", "mood = \"normal\"\n\n[[entries]]\nlabel = \"w\"");
        assert!(Sheet::from_toml("vim", &source).is_err());
    }

    #[test]
    fn test_search_groups_in_manifest_order() {
        let sheet = vim();
        let groups = sheet.search("", Lang::En);
        let ids: Vec<_> = groups.iter().map(|g| g.category.id.as_str()).collect();
        // "visual" has no entries and is not emitted
        assert_eq!(ids, ["movement", "editing"]);
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].label, "h");
        assert_eq!(groups[0].entries[1].label, "w");
    }

    #[test]
    fn test_search_matches_resolved_description() {
        let sheet = vim();
        let groups = sheet.search("LIGNE", Lang::Fr);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries[0].label, "dd");

        // The French word is not searchable in English
        assert!(sheet.search("ligne", Lang::En).is_empty());
        assert_eq!(sheet.count_matches("line", Lang::En), 1);
    }

    #[test]
    fn test_search_fields() {
        let entry = Entry::new("printf", "functions")
            .with_description(Text::localized("Print formatted text", "Afficher du texte formaté"))
            .with_example("printf(\"%d\", 42);")
            .with_header("stdio.h");
        assert_eq!(
            entry.search_fields(Lang::En),
            ["printf", "Print formatted text", "printf(\"%d\", 42);", "stdio.h"]
        );
        assert_eq!(entry.origin(), Some(Origin::Header("stdio.h")));
    }

    #[test]
    fn test_origin_precedence() {
        let mut entry = Entry::new("Console.WriteLine()", "functions");
        assert_eq!(entry.origin(), None);
        entry.namespace = Some("System".to_string());
        assert_eq!(entry.origin().map(Origin::name), Some("System"));
    }

    #[test]
    fn test_untranslated_fields() {
        let mut entry = Entry::new("int", "types").with_description("Entier signé");
        entry.range = Some(Text::localized("-2^31 to 2^31-1", "-2^31 à 2^31-1"));
        assert_eq!(entry.untranslated_fields(), ["description"]);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let entry = Entry::new("h", "movement").with_mode(Mode::Normal);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "h", "category": "movement", "mode": "normal" })
        );
    }
}
