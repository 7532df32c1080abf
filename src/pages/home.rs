//! Home Page
//!
//! The closet view: selection display, category checklist, add-item form
//! and account panel. Requires an active identity; redirects to the login
//! page once the auth provider reports signed-out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{AccountPanel, AddItemForm, Checklist, Header, Overlay, SelectionDisplay};
use crate::context::use_closet_context;
use crate::session::AuthState;
use crate::store::{store_set_items, use_closet_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_closet_context();
    let store = use_closet_store();
    let auth_state = ctx.session.state();
    let overlay = RwSignal::new(Overlay::None);
    let navigate = StoredValue::new(use_navigate());

    // Redirect once the provider reports signed-out. The Unknown state
    // (before the first auth callback) neither redirects nor fetches.
    Effect::new(move |_| {
        if auth_state.get() == AuthState::SignedOut {
            navigate.with_value(|nav| nav("/login", Default::default()));
        }
    });

    // Fetch the closet whenever a signed-in identity appears.
    Effect::new(move |_| {
        if let AuthState::SignedIn(user) = auth_state.get() {
            let repo = ctx.repo();
            spawn_local(async move {
                let items = repo.fetch_items(&user.uid).await;
                store_set_items(&store, items);
            });
        }
    });

    view! {
        <Show when=move || auth_state.get().identity().is_some() fallback=|| ()>
            <div class="app">
                <Header overlay=overlay />
                <main id="main">
                    <SelectionDisplay />
                    <div id="sidebar">
                        <div id="clothes">"Clothes"</div>
                        <Checklist />
                        <button id="add" on:click=move |_| overlay.set(Overlay::AddItem)>
                            <span id="plus">"➕"</span>
                            <span id="add-item">"Add Item"</span>
                        </button>
                    </div>
                </main>
                <Show when=move || overlay.get() == Overlay::AddItem>
                    <AddItemForm overlay=overlay />
                </Show>
                <Show when=move || overlay.get() == Overlay::Account>
                    <AccountPanel overlay=overlay />
                </Show>
            </div>
        </Show>
    }
}
