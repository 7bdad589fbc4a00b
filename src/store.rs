//! In-memory content collection and its mutation rules.
//!
//! The store owns every item for the lifetime of the process. Insertion
//! order is preserved; the per-category views are filtered projections of
//! the single underlying list.

use crate::content::{ContentItem, ContentKind};
use uuid::Uuid;

/// Ordered collection of all content items across every category.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total item count across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The full collection in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Append a new item under `kind` and return its id.
    ///
    /// Declines (returns `None`, collection untouched) when the title is
    /// blank after trimming. The stored title keeps the submitted string
    /// verbatim; trimming only feeds the guard.
    pub fn add(&mut self, title: &str, description: &str, kind: ContentKind) -> Option<Uuid> {
        if title.trim().is_empty() {
            return None;
        }
        let item = ContentItem::new(title, description, kind);
        let id = item.id;
        self.items.push(item);
        Some(id)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the title and description of the item matching `id` in place.
    ///
    /// Id, kind, and position are untouched; every other item is left as-is.
    /// Returns `false` when no item matches. Unlike [`ContentStore::add`],
    /// this performs no blank-title check.
    pub fn update(&mut self, id: Uuid, title: &str, description: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.title = title.to_string();
                item.description = if description.is_empty() {
                    None
                } else {
                    Some(description.to_string())
                };
                true
            }
            None => false,
        }
    }

    /// Remove the item matching `id`. Returns `false` when no item matches.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Items belonging to `kind`, in insertion order.
    pub fn items_for(&self, kind: ContentKind) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Number of items belonging to `kind`.
    #[must_use]
    pub fn count_for(&self, kind: ContentKind) -> usize {
        self.items_for(kind).count()
    }
}
