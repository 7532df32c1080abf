//! In-memory provider fakes for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::models::Identity;
use crate::providers::{
    AuthError, AuthProvider, Document, DocumentStore, ObjectHandle, ObjectStore, StoreError,
};

/// Auth provider with scripted results and a manually driven auth-state
/// subscription.
pub struct FakeAuthProvider {
    pub users: RefCell<Vec<Identity>>,
    pub fail_with: RefCell<Option<AuthError>>,
    listeners: RefCell<Vec<Box<dyn FnMut(Option<Identity>)>>>,
}

impl FakeAuthProvider {
    pub fn new() -> Self {
        Self {
            users: RefCell::new(Vec::new()),
            fail_with: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Fire the auth-state listeners, as the real provider does on every
    /// sign-in/sign-out.
    pub fn emit(&self, identity: Option<Identity>) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(identity.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn scripted_failure(&self) -> Option<AuthError> {
        self.fail_with.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuthProvider {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        let identity = Identity {
            uid: format!("uid-{}", self.users.borrow().len() + 1),
            email: email.to_string(),
        };
        self.users.borrow_mut().push(identity.clone());
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        if let Some(err) = self.scripted_failure() {
            return Err(err);
        }
        self.users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| AuthError {
                code: "auth/user-not-found".to_string(),
                message: "There is no user record corresponding to this identifier.".to_string(),
            })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn FnMut(Option<Identity>)>) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// Document store backed by a plain vec, with switchable failures.
pub struct FakeDocumentStore {
    docs: RefCell<Vec<(String, Document)>>,
    next_id: Cell<u32>,
    /// Every successful insert, in order: (collection, fields)
    pub inserted: RefCell<Vec<(String, serde_json::Value)>>,
    pub fail_query: Cell<bool>,
    pub fail_insert: Cell<bool>,
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        Self {
            docs: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            inserted: RefCell::new(Vec::new()),
            fail_query: Cell::new(false),
            fail_insert: Cell::new(false),
        }
    }

    /// Pre-load a document without going through `insert`.
    pub fn seed(&self, collection: &str, data: serde_json::Value) -> String {
        let id = self.assign_id();
        self.docs
            .borrow_mut()
            .push((collection.to_string(), Document { id: id.clone(), data }));
        id
    }

    fn assign_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("doc-{id}")
    }
}

#[async_trait(?Send)]
impl DocumentStore for FakeDocumentStore {
    async fn query(
        &self,
        collection: &str,
        field: &str,
        equals: &str,
    ) -> Result<Vec<Document>, StoreError> {
        if self.fail_query.get() {
            return Err(StoreError::Rejected("query refused".to_string()));
        }
        Ok(self
            .docs
            .borrow()
            .iter()
            .filter(|(c, doc)| {
                c == collection && doc.data.get(field).and_then(|v| v.as_str()) == Some(equals)
            })
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn insert(
        &self,
        collection: &str,
        fields: &serde_json::Value,
    ) -> Result<String, StoreError> {
        if self.fail_insert.get() {
            return Err(StoreError::Rejected("insert refused".to_string()));
        }
        self.inserted
            .borrow_mut()
            .push((collection.to_string(), fields.clone()));
        let id = self.assign_id();
        self.docs.borrow_mut().push((
            collection.to_string(),
            Document {
                id: id.clone(),
                data: fields.clone(),
            },
        ));
        Ok(id)
    }
}

/// Object store recording every put, with a switchable failure.
pub struct FakeObjectStore {
    /// Every successful put, in order: (key, byte length)
    pub puts: RefCell<Vec<(String, usize)>>,
    pub fail_put: Cell<bool>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self {
            puts: RefCell::new(Vec::new()),
            fail_put: Cell::new(false),
        }
    }

    pub fn url_for(&self, key: &str) -> String {
        format!("https://objects.test/{key}")
    }
}

#[async_trait(?Send)]
impl ObjectStore for FakeObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<ObjectHandle, StoreError> {
        if self.fail_put.get() {
            return Err(StoreError::Rejected("upload refused".to_string()));
        }
        self.puts
            .borrow_mut()
            .push((key.to_string(), bytes.len()));
        Ok(ObjectHandle(key.to_string()))
    }

    async fn public_url(&self, handle: &ObjectHandle) -> Result<String, StoreError> {
        Ok(self.url_for(&handle.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_auth_reports_state_changes_to_every_listener() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let auth = FakeAuthProvider::new();
        let seen: Rc<RefCell<Vec<Option<Identity>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        auth.subscribe(Box::new(move |identity| sink.borrow_mut().push(identity)));
        assert_eq!(auth.listener_count(), 1);

        let user = auth.sign_up("a@example.com", "pw").await.unwrap();
        auth.emit(Some(user.clone()));
        auth.emit(None);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].as_ref().map(|i| i.email.as_str()), Some("a@example.com"));
        assert!(seen[1].is_none());
    }

    #[tokio::test]
    async fn fake_auth_surfaces_scripted_provider_errors() {
        let auth = FakeAuthProvider::new();
        *auth.fail_with.borrow_mut() = Some(AuthError {
            code: "auth/weak-password".to_string(),
            message: "Password should be at least 6 characters".to_string(),
        });

        let err = auth.sign_up("a@example.com", "pw").await.unwrap_err();
        assert_eq!(err.code, "auth/weak-password");
        assert_eq!(err.to_string(), "Password should be at least 6 characters");
    }
}
