//! My Closet Frontend App
//!
//! Wires the backend providers into context and mounts the three routes.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::add_item::AddItemService;
use crate::context::ClosetContext;
use crate::pages::{HomePage, LoginPage, SignupPage};
use crate::providers::firebase::{FirebaseAuth, FirebaseStorage, Firestore};
use crate::providers::{AuthProvider, DocumentStore, ObjectStore};
use crate::repository::ItemRepository;
use crate::session::SessionStore;
use crate::store::ClosetState;

#[component]
pub fn App() -> impl IntoView {
    let auth: Rc<dyn AuthProvider> = Rc::new(FirebaseAuth::new());
    let docs: Rc<dyn DocumentStore> = Rc::new(Firestore::new());
    let objects: Rc<dyn ObjectStore> = Rc::new(FirebaseStorage::new());

    let repo = Rc::new(ItemRepository::new(docs));
    let add_item = Rc::new(AddItemService::new(objects, Rc::clone(&repo)));

    let session = SessionStore::new();
    session.attach(&auth);

    provide_context(ClosetContext::new(session, auth, repo, add_item));
    provide_context(Store::new(ClosetState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
            </Routes>
        </Router>
    }
}
