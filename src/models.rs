//! Frontend Models
//!
//! Data structures mirroring the backend documents.

use serde::{Deserialize, Serialize};

/// Authenticated user handle, owned by the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// A persisted clothing record owned by one identity
///
/// `category` stays a raw string: a document with an unrecognized category
/// must still decode, it is just excluded from every checklist group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
}

/// User input collected by the add-item form, before the image is resolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// An image file picked in the add-item form
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}
