//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::selection::SelectionMap;

/// App-wide closet state
///
/// `items` mirrors the remote collection for the signed-in identity;
/// `selection` is transient UI state and is reset with every reload.
#[derive(Clone, Debug, Default, Store)]
pub struct ClosetState {
    pub items: Vec<Item>,
    pub selection: SelectionMap,
}

pub type ClosetStore = Store<ClosetState>;

/// Get the closet store from context
pub fn use_closet_store() -> ClosetStore {
    expect_context::<ClosetStore>()
}

/// Replace the item list after a fetch; any prior selection is stale
/// and dropped with it.
pub fn store_set_items(store: &ClosetStore, items: Vec<Item>) {
    *store.items().write() = items;
    store.selection().write().clear();
}

/// Append a freshly written item (optimistic, no re-fetch)
pub fn store_append_item(store: &ClosetStore, item: Item) {
    store.items().write().push(item);
}

/// Select an item for its category, replacing any prior selection there
pub fn store_select_item(store: &ClosetStore, item: Item) {
    store.selection().write().select(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn item(id: &str, category: &str) -> Item {
        Item {
            id: id.to_string(),
            owner_id: "u1".to_string(),
            title: String::new(),
            description: String::new(),
            category: category.to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn set_items_replaces_the_list_and_drops_the_selection() {
        let store = Store::new(ClosetState::default());
        store_append_item(&store, item("1", "Tops"));
        store_select_item(&store, item("1", "Tops"));
        assert!(store
            .selection()
            .read_untracked()
            .selected(Category::Tops)
            .is_some());

        store_set_items(&store, vec![item("2", "Shoes")]);
        assert_eq!(store.items().read_untracked().len(), 1);
        assert_eq!(store.items().read_untracked()[0].id, "2");
        assert!(store
            .selection()
            .read_untracked()
            .selected(Category::Tops)
            .is_none());
    }
}
