//! Backend Provider Seams
//!
//! Abstract interfaces over the third-party auth / document-store /
//! object-storage backend. The production implementations bind the
//! Firebase JS SDK; tests substitute in-memory fakes.

pub mod firebase;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Identity;

/// Provider-coded authentication error, displayed verbatim to the user
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

/// Errors from the document and object stores
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The backend rejected the request
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    /// The backend answered with something we could not decode
    #[error("malformed backend response: {0}")]
    Decode(String),
}

/// A raw document returned by [`DocumentStore::query`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Handle to a stored object, as returned by [`ObjectStore::put`]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectHandle(pub String);

/// Authentication backend
///
/// Each call fails with a provider-defined code and message. A single
/// auth-state subscription is installed for the life of the view.
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Install the auth-state listener. The provider calls it with the
    /// current identity immediately and again on every change.
    fn subscribe(&self, listener: Box<dyn FnMut(Option<Identity>)>);
}

/// Document database backend
#[async_trait(?Send)]
pub trait DocumentStore {
    /// All documents in `collection` whose `field` equals `equals`,
    /// in backend order.
    async fn query(
        &self,
        collection: &str,
        field: &str,
        equals: &str,
    ) -> Result<Vec<Document>, StoreError>;

    /// Insert a document and return its assigned id.
    async fn insert(
        &self,
        collection: &str,
        fields: &serde_json::Value,
    ) -> Result<String, StoreError>;
}

/// Object (blob) storage backend
#[async_trait(?Send)]
pub trait ObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<ObjectHandle, StoreError>;
    async fn public_url(&self, handle: &ObjectHandle) -> Result<String, StoreError>;
}
