//! Application Context
//!
//! Backend collaborators and the session store, provided via the Leptos
//! Context API so components never touch module-level globals. The provider
//! handles are `Rc`s over wasm bindings and live in local storage slots.

use std::rc::Rc;

use leptos::prelude::*;

use crate::add_item::AddItemService;
use crate::providers::AuthProvider;
use crate::repository::ItemRepository;
use crate::session::SessionStore;

#[derive(Clone, Copy)]
pub struct ClosetContext {
    pub session: SessionStore,
    auth: StoredValue<Rc<dyn AuthProvider>, LocalStorage>,
    repo: StoredValue<Rc<ItemRepository>, LocalStorage>,
    add_item: StoredValue<Rc<AddItemService>, LocalStorage>,
}

impl ClosetContext {
    pub fn new(
        session: SessionStore,
        auth: Rc<dyn AuthProvider>,
        repo: Rc<ItemRepository>,
        add_item: Rc<AddItemService>,
    ) -> Self {
        Self {
            session,
            auth: StoredValue::new_local(auth),
            repo: StoredValue::new_local(repo),
            add_item: StoredValue::new_local(add_item),
        }
    }

    pub fn auth(&self) -> Rc<dyn AuthProvider> {
        self.auth.get_value()
    }

    pub fn repo(&self) -> Rc<ItemRepository> {
        self.repo.get_value()
    }

    pub fn add_item(&self) -> Rc<AddItemService> {
        self.add_item.get_value()
    }
}

pub fn use_closet_context() -> ClosetContext {
    expect_context::<ClosetContext>()
}
