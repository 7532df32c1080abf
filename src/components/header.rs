//! App Header
//!
//! Title bar with the account button.

use leptos::prelude::*;

use super::Overlay;

#[component]
pub fn Header(overlay: RwSignal<Overlay>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div id="account">
                <button id="view-account" on:click=move |_| overlay.set(Overlay::Account)>
                    "My Account"
                </button>
            </div>
            <div id="my-closet">"My Closet"</div>
        </header>
    }
}
