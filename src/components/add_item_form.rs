//! Add-Item Form
//!
//! Modal overlay collecting a new item's fields and optional image.
//! Fields are cleared and the overlay closed only after a successful
//! write; any failure leaves the form as entered.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};

use super::Overlay;
use crate::add_item::{AddItemState, SubmitOutcome};
use crate::category::Category;
use crate::context::use_closet_context;
use crate::models::{ImageFile, ItemDraft};
use crate::store::{store_append_item, use_closet_store};

async fn read_image(file: &web_sys::File) -> Result<ImageFile, JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageFile {
        name: file.name(),
        bytes,
    })
}

#[component]
pub fn AddItemForm(overlay: RwSignal<Overlay>) -> impl IntoView {
    let ctx = use_closet_context();
    let store = use_closet_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (image, set_image) = signal(Option::<ImageFile>::None);
    let (preview, set_preview) = signal(Option::<String>::None);
    // The form being mounted is the Editing state.
    let (flow_state, set_flow_state) = signal(AddItemState::Editing);

    let busy = move || {
        matches!(
            flow_state.get(),
            AddItemState::Uploading | AddItemState::Writing
        )
    };

    let on_image_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_preview.set(web_sys::Url::create_object_url_with_blob(&file).ok());
        spawn_local(async move {
            match read_image(&file).await {
                Ok(picked) => set_image.set(Some(picked)),
                Err(err) => web_sys::console::error_1(&err),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let Some(user) = ctx.session.state().get_untracked().identity().cloned() else {
            return;
        };
        let draft = ItemDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
        };
        if draft.title.is_empty() || draft.category.is_empty() {
            return;
        }
        let picked = image.get_untracked();
        let add_item = ctx.add_item();

        spawn_local(async move {
            let outcome = add_item
                .submit(&user.uid, &draft, picked.as_ref(), |state| {
                    set_flow_state.set(state)
                })
                .await;
            match outcome {
                SubmitOutcome::Added(item) => {
                    store_append_item(&store, item);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_category.set(String::new());
                    set_image.set(None);
                    set_preview.set(None);
                    overlay.set(Overlay::None);
                }
                SubmitOutcome::UploadFailed(err) => {
                    let _ = window().alert_with_message(&format!("Error uploading image: {err}"));
                }
                SubmitOutcome::WriteFailed(err) => {
                    warn!(%err, "saving the item failed, the form stays as entered");
                }
            }
        });
    };

    view! {
        <div id="overlay" on:click=move |_| overlay.set(Overlay::None)></div>
        <form id="add-item-form" on:submit=on_submit>
            <header class="new-item">"New Item"</header>

            <label for="item-name">"Name:"</label>
            <input
                id="item-name"
                name="item-name"
                required
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />

            <label for="description">"Description:"</label>
            <input
                id="description"
                name="description"
                required
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_description.set(input.value());
                }
            />

            <label for="category">"Category:"</label>
            <select
                id="category"
                name="category"
                required
                prop:value=move || category.get()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_category.set(select.value());
                }
            >
                <option value="" disabled>
                    "Select a category"
                </option>
                {Category::ALL
                    .iter()
                    .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                    .collect_view()}
            </select>

            <label for="image">"Upload Image:"</label>
            <input
                type="file"
                accept="image/*"
                id="image"
                name="image"
                on:change=on_image_change
            />
            {move || {
                preview
                    .get()
                    .map(|url| view! { <img src=url alt="Preview" id="preview" /> })
            }}

            <button id="save-item-button" type="submit" disabled=busy>
                {move || match flow_state.get() {
                    AddItemState::Uploading => "Uploading...",
                    AddItemState::Writing => "Saving...",
                    _ => "Add Item",
                }}
            </button>
        </form>
    }
}
