//! Account Panel
//!
//! Modal overlay showing the signed-in account with a sign-out button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use tracing::warn;

use super::Overlay;
use crate::context::use_closet_context;

#[component]
pub fn AccountPanel(overlay: RwSignal<Overlay>) -> impl IntoView {
    let ctx = use_closet_context();
    let navigate = StoredValue::new(use_navigate());

    let email = move || {
        ctx.session
            .state()
            .get()
            .identity()
            .map(|identity| identity.email.clone())
            .unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let auth = ctx.auth();
        spawn_local(async move {
            if let Err(err) = auth.sign_out().await {
                warn!(%err, "sign-out failed");
            }
        });
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    view! {
        <div id="overlay" on:click=move |_| overlay.set(Overlay::None)></div>
        <form id="account-form" on:submit=on_submit>
            <header class="your-account">"Account: " {email}</header>
            <button id="sign-out-button" type="submit">
                "Sign Out"
            </button>
        </form>
    }
}
