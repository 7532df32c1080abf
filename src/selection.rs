//! Selection State
//!
//! Per-category choice of at most one item, held only in transient UI state.

use std::collections::HashMap;

use crate::category::Category;
use crate::models::Item;

/// Mapping from category to the currently selected item.
///
/// Never persisted; reset whenever the item list is reloaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionMap {
    entries: HashMap<Category, Item>,
}

impl SelectionMap {
    /// Select an item for its own category, replacing any prior selection.
    ///
    /// Re-selecting the already selected item is a no-op (replace, not
    /// toggle). Items with an unrecognized category cannot be selected.
    pub fn select(&mut self, item: Item) {
        if let Some(category) = Category::from_str(&item.category) {
            self.entries.insert(category, item);
        }
    }

    pub fn selected(&self, category: Category) -> Option<&Item> {
        self.entries.get(&category)
    }

    pub fn is_selected(&self, item: &Item) -> bool {
        Category::from_str(&item.category)
            .and_then(|c| self.entries.get(&c))
            .is_some_and(|selected| selected.id == item.id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
