//! Plain-text rendering shared by `search` and `show`.

use std::io::{self, Write};

use raccourcis_core::{Entry, Group, Lang, Sheet};

/// Labels longer than this are not used to size the label column.
const MAX_LABEL_WIDTH: usize = 28;

pub fn write_sheet_heading<W: Write>(out: &mut W, sheet: &Sheet, lang: Lang) -> io::Result<()> {
    writeln!(out, "{} [{}]", sheet.title.resolve(lang), sheet.id)?;
    writeln!(out, "{}", sheet.subtitle.resolve(lang))
}

pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &[Group<'_, Entry>],
    lang: Lang,
    examples: bool,
) -> io::Result<()> {
    let width = groups
        .iter()
        .flat_map(|g| &g.entries)
        .map(|e| e.label.chars().count())
        .filter(|&len| len <= MAX_LABEL_WIDTH)
        .max()
        .unwrap_or(0);

    for group in groups {
        writeln!(out)?;
        let icon = group.category.icon.as_deref().map(|i| format!("{i} ")).unwrap_or_default();
        writeln!(
            out,
            "{icon}{} ({})",
            group.category.title.resolve(lang),
            group.len()
        )?;
        for entry in &group.entries {
            write_entry(out, entry, lang, width, examples)?;
        }
    }
    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    entry: &Entry,
    lang: Lang,
    width: usize,
    examples: bool,
) -> io::Result<()> {
    let mut line = format!("  {:<width$}", entry.label);
    if let Some(description) = entry.description(lang) {
        line.push_str("  ");
        line.push_str(description);
    }
    let badges: Vec<&str> = entry
        .mode
        .map(|m| m.as_str())
        .into_iter()
        .chain(entry.origin().map(|o| o.name()))
        .chain(entry.group.as_deref())
        .chain(entry.size.as_deref())
        .collect();
    if !badges.is_empty() {
        line.push_str(&format!("  [{}]", badges.join(", ")));
    }
    writeln!(out, "{}", line.trim_end())?;

    if let Some(range) = entry.range(lang) {
        writeln!(out, "      {range}")?;
    }
    if examples {
        if let Some(example) = &entry.example {
            for example_line in example.lines() {
                writeln!(out, "      | {example_line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raccourcis_core::{group_by_category, Category, Mode, Text};

    fn render(examples: bool) -> String {
        let manifest = vec![Category::new("editing", Text::localized("Editing", "Édition"))];
        let entries = vec![
            Entry::new("dd", "editing")
                .with_description(Text::localized("Delete line", "Supprimer la ligne"))
                .with_mode(Mode::Normal)
                .with_example("dd\n3dd"),
        ];
        let groups = group_by_category(&manifest, &entries);
        let mut out = Vec::new();
        write_groups(&mut out, &groups, Lang::En, examples).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_groups() {
        assert_eq!(render(false), "\nEditing (1)\n  dd  Delete line  [normal]\n");
    }

    #[test]
    fn test_write_groups_with_examples() {
        assert_eq!(
            render(true),
            "\nEditing (1)\n  dd  Delete line  [normal]\n      | dd\n      | 3dd\n"
        );
    }
}
