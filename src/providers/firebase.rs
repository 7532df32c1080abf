//! Firebase Provider Bindings
//!
//! Frontend bindings to the Firebase JS SDK, reached through the
//! `window.__CLOSET_FIREBASE__` shim (see `assets/firebase-bridge.js`).

use async_trait::async_trait;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{AuthError, AuthProvider, Document, DocumentStore, ObjectHandle, ObjectStore, StoreError};
use crate::models::Identity;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = signUp, catch)]
    async fn raw_sign_up(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = signIn, catch)]
    async fn raw_sign_in(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = signOut, catch)]
    async fn raw_sign_out() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = onAuthStateChanged)]
    fn raw_on_auth_state_changed(callback: &js_sys::Function);

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = queryByField, catch)]
    async fn raw_query_by_field(
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = insertDoc, catch)]
    async fn raw_insert_doc(collection: &str, fields: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = uploadBytes, catch)]
    async fn raw_upload_bytes(key: &str, bytes: &[u8]) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CLOSET_FIREBASE__"], js_name = downloadUrl, catch)]
    async fn raw_download_url(path: &str) -> Result<JsValue, JsValue>;
}

fn js_string(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn auth_error(err: JsValue) -> AuthError {
    AuthError {
        code: js_string(&err, "code").unwrap_or_else(|| "auth/unknown".to_string()),
        message: js_string(&err, "message")
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}")),
    }
}

fn store_error(err: JsValue) -> StoreError {
    StoreError::Rejected(
        js_string(&err, "message")
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

fn identity_from(value: JsValue) -> Result<Identity, AuthError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| AuthError {
        code: "auth/malformed-credential".to_string(),
        message: e.to_string(),
    })
}

/// Firebase Authentication
pub struct FirebaseAuth;

impl FirebaseAuth {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl AuthProvider for FirebaseAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let value = raw_sign_up(email, password).await.map_err(auth_error)?;
        identity_from(value)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let value = raw_sign_in(email, password).await.map_err(auth_error)?;
        identity_from(value)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        raw_sign_out().await.map_err(auth_error)?;
        Ok(())
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(Option<Identity>)>) {
        let closure = Closure::wrap(Box::new(move |value: JsValue| {
            let identity = serde_wasm_bindgen::from_value::<Option<Identity>>(value).unwrap_or(None);
            listener(identity);
        }) as Box<dyn FnMut(JsValue)>);
        raw_on_auth_state_changed(closure.as_ref().unchecked_ref());
        // One subscription for the life of the view.
        closure.forget();
    }
}

/// Cloud Firestore
pub struct Firestore;

impl Firestore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl DocumentStore for Firestore {
    async fn query(
        &self,
        collection: &str,
        field: &str,
        equals: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let value = raw_query_by_field(collection, field, equals)
            .await
            .map_err(store_error)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn insert(
        &self,
        collection: &str,
        fields: &serde_json::Value,
    ) -> Result<String, StoreError> {
        let js_fields =
            serde_wasm_bindgen::to_value(fields).map_err(|e| StoreError::Decode(e.to_string()))?;
        let value = raw_insert_doc(collection, js_fields)
            .await
            .map_err(store_error)?;
        value
            .as_string()
            .ok_or_else(|| StoreError::Decode("insert returned a non-string id".to_string()))
    }
}

/// Cloud Storage for Firebase
pub struct FirebaseStorage;

impl FirebaseStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ObjectStore for FirebaseStorage {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<ObjectHandle, StoreError> {
        let value = raw_upload_bytes(key, bytes).await.map_err(store_error)?;
        value
            .as_string()
            .map(ObjectHandle)
            .ok_or_else(|| StoreError::Decode("upload returned a non-string path".to_string()))
    }

    async fn public_url(&self, handle: &ObjectHandle) -> Result<String, StoreError> {
        let value = raw_download_url(&handle.0).await.map_err(store_error)?;
        value
            .as_string()
            .ok_or_else(|| StoreError::Decode("download URL is not a string".to_string()))
    }
}
