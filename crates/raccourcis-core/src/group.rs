//! Manifest-ordered grouping of entries into categories.

use crate::sheet::Category;

/// Items that belong to a category by id.
pub trait Categorized {
    fn category_id(&self) -> &str;
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category_id(&self) -> &str {
        (**self).category_id()
    }
}

/// A non-empty run of entries under one manifest category.
#[derive(Debug)]
pub struct Group<'a, T> {
    pub category: &'a Category,
    pub entries: Vec<&'a T>,
}

impl<T> Group<'_, T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Clone for Group<'_, T> {
    fn clone(&self) -> Self {
        Self {
            category: self.category,
            entries: self.entries.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Group<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.entries == other.entries
    }
}

/// Partition `entries` by category, in manifest order.
///
/// Categories with no entries are skipped, as are entries whose category is
/// missing from the manifest. Entry order within a group is kept.
pub fn group_by_category<'a, T, I>(manifest: &'a [Category], entries: I) -> Vec<Group<'a, T>>
where
    T: Categorized,
    I: IntoIterator<Item = &'a T>,
{
    let mut buckets: Vec<Vec<&'a T>> = vec![Vec::new(); manifest.len()];
    for entry in entries {
        match manifest.iter().position(|c| c.id == entry.category_id()) {
            Some(index) => buckets[index].push(entry),
            None => log::debug!(
                "entry in unknown category `{}` left out of grouping",
                entry.category_id()
            ),
        }
    }

    manifest
        .iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, entries)| Group { category, entries })
        .collect()
}

/// Category id of the tab to show.
///
/// `requested` is kept while it still has a visible group; otherwise the
/// first visible group is selected, or `None` when nothing is visible.
pub fn active_tab<'a, T>(groups: &[Group<'a, T>], requested: Option<&str>) -> Option<&'a str> {
    requested
        .and_then(|id| groups.iter().find(|g| g.category.id == id))
        .or_else(|| groups.first())
        .map(|g| g.category.id.as_str())
}
