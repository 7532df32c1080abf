//! Selection Display
//!
//! One tile per category showing the selected item's image, or a prompt
//! when nothing is selected yet.

use leptos::prelude::*;

use crate::category::Category;
use crate::store::{use_closet_store, ClosetStateStoreFields};

#[component]
pub fn SelectionDisplay() -> impl IntoView {
    let store = use_closet_store();

    view! {
        <div id="closet">
            {Category::ALL
                .iter()
                .map(|&category| {
                    view! {
                        <div class="closet-tile">
                            <p class="tile-label">{category.as_str()}</p>
                            {move || {
                                let selected =
                                    store.selection().read().selected(category).cloned();
                                match selected {
                                    Some(item) if !item.image_url.is_empty() => view! {
                                        <img
                                            class="tile-image"
                                            src=item.image_url
                                            alt=format!("Selected {category}")
                                        />
                                    }
                                    .into_any(),
                                    _ => view! {
                                        <p class="tile-prompt">
                                            {format!("Select one of the {category}")}
                                        </p>
                                    }
                                    .into_any(),
                                }
                            }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
