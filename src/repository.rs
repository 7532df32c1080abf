//! Item Repository
//!
//! Fetches and appends clothing records scoped to the signed-in identity.
//! The local item list mirrors remote storage; it is not authoritative.

use std::rc::Rc;

use serde_json::json;
use tracing::warn;

use crate::models::{Item, ItemDraft};
use crate::providers::{Document, DocumentStore, StoreError};

pub const ITEMS_COLLECTION: &str = "items";

pub struct ItemRepository {
    docs: Rc<dyn DocumentStore>,
}

impl ItemRepository {
    pub fn new(docs: Rc<dyn DocumentStore>) -> Self {
        Self { docs }
    }

    /// All items owned by `owner_id`, in backend order.
    ///
    /// Degrades to an empty list on error; there is no user-facing error
    /// path for fetches. Must only be called with a signed-in identity.
    pub async fn fetch_items(&self, owner_id: &str) -> Vec<Item> {
        match self.docs.query(ITEMS_COLLECTION, "userId", owner_id).await {
            Ok(docs) => docs.iter().map(item_from_document).collect(),
            Err(err) => {
                warn!(%err, "fetching items failed, showing an empty closet");
                Vec::new()
            }
        }
    }

    /// Insert a new record and return it with the assigned id.
    ///
    /// The caller appends the returned item optimistically; there is no
    /// re-fetch and no rollback on failure.
    pub async fn add_item(
        &self,
        owner_id: &str,
        draft: &ItemDraft,
        image_url: &str,
    ) -> Result<Item, StoreError> {
        let fields = json!({
            "userId": owner_id,
            "title": draft.title,
            "content": draft.description,
            "category": draft.category,
            "imageUrl": image_url,
        });
        let id = self.docs.insert(ITEMS_COLLECTION, &fields).await?;
        Ok(Item {
            id,
            owner_id: owner_id.to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            image_url: image_url.to_string(),
        })
    }
}

/// Decode a raw document, defaulting any missing optional field to `""`.
fn item_from_document(doc: &Document) -> Item {
    let text = |key: &str| {
        doc.data
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    Item {
        id: doc.id.clone(),
        owner_id: text("userId"),
        title: text("title"),
        description: text("content"),
        category: text("category"),
        image_url: text("imageUrl"),
    }
}
