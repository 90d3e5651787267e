//! Last-known-good collection state.

use log::warn;

use crate::model::{Recipe, RecipeId};

/// Ordered, id-unique collection of server-confirmed recipes.
///
/// Every mutation corresponds to one confirmed gateway result; nothing in
/// here is speculative. Insertion order is preserved: creates append,
/// updates replace in place, deletes remove in place.
#[derive(Debug, Clone, Default)]
pub struct RecipeCache {
    entries: Vec<Recipe>,
}

impl RecipeCache {
    pub fn new() -> Self {
        RecipeCache::default()
    }

    /// Wholesale replacement after a successful fetch. A duplicate id in
    /// the fetched payload keeps its first occurrence.
    pub fn replace_all(&mut self, items: Vec<Recipe>) {
        let mut entries: Vec<Recipe> = Vec::with_capacity(items.len());
        for item in items {
            if entries.iter().any(|existing| existing.id == item.id) {
                warn!(
                    "fetched collection repeats recipe id {}, keeping the first entry",
                    item.id
                );
            } else {
                entries.push(item);
            }
        }
        self.entries = entries;
    }

    /// Appends a confirmed create. An id collision replaces the existing
    /// entry in place instead of duplicating it.
    pub fn append(&mut self, item: Recipe) {
        if self.entries.iter().any(|existing| existing.id == item.id) {
            warn!(
                "created recipe id {} is already cached, replacing the existing entry",
                item.id
            );
            self.replace_by_id(item);
        } else {
            self.entries.push(item);
        }
    }

    /// In-place replacement after a confirmed update, preserving position.
    /// Returns whether a matching entry existed; a miss is an inconsistency
    /// between cache and remote and is only logged.
    pub fn replace_by_id(&mut self, item: Recipe) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.id == item.id)
        {
            Some(slot) => {
                *slot = item;
                true
            }
            None => {
                warn!("no cached recipe with id {} to replace", item.id);
                false
            }
        }
    }

    /// Removes the entry after a confirmed delete. Returns whether one
    /// was actually removed.
    pub fn remove_by_id(&mut self, id: RecipeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| existing.id != id);
        before != self.entries.len()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.entries.iter().find(|existing| existing.id == id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
