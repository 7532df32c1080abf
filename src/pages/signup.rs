//! Signup Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::context::use_closet_context;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_closet_context();
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let auth = ctx.auth();
        spawn_local(async move {
            match auth.sign_up(&email, &password).await {
                // The account exists but is not signed in yet; go log in.
                Ok(_) => navigate.with_value(|nav| nav("/login", Default::default())),
                Err(err) => set_error_message.set(Some(err.message)),
            }
        });
    };

    view! {
        <div id="sign-up-page">
            <div id="my-closet-title">"My Closet"</div>
            <form on:submit=on_submit>
                <header class="log-in">"Sign Up"</header>

                <label for="email">"Email: "</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />

                <label for="password">"Password: "</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                {move || {
                    error_message.get().map(|msg| view! { <p class="error">{msg}</p> })
                }}

                <button id="sign-up-button" type="submit">
                    "Sign up"
                </button>
            </form>
        </div>
    }
}
