//! Category Checklist
//!
//! Expandable per-category sections with one checkbox row per item.
//! Each category has its own open/closed flag, initially collapsed.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::category::{group_by_category, Category};
use crate::store::{store_select_item, use_closet_store, ClosetStateStoreFields};

#[component]
pub fn Checklist() -> impl IntoView {
    let store = use_closet_store();
    let (open, set_open) = signal(HashSet::<Category>::new());

    let toggle = move |category: Category| {
        set_open.update(|open| {
            if !open.remove(&category) {
                open.insert(category);
            }
        });
    };

    view! {
        <div id="checklist">
            {Category::ALL
                .iter()
                .map(|&category| {
                    let is_open = move || open.with(|o| o.contains(&category));
                    view! {
                        <div class="category-section">
                            <div class="category-header" on:click=move |_| toggle(category)>
                                <span>{category.as_str()}</span>
                                <span>{move || if is_open() { "▲" } else { "▼" }}</span>
                            </div>
                            <Show when=is_open>
                                <div class="category-items">
                                    {move || {
                                        let group = group_by_category(&store.items().read())
                                            .into_iter()
                                            .find(|(c, _)| *c == category)
                                            .map(|(_, group)| group)
                                            .unwrap_or_default();
                                        if group.is_empty() {
                                            view! {
                                                <p class="no-items">"No items in this category."</p>
                                            }
                                            .into_any()
                                        } else {
                                            group
                                                .into_iter()
                                                .map(|item| {
                                                    let checked = {
                                                        let item = item.clone();
                                                        move || {
                                                            store
                                                                .selection()
                                                                .read()
                                                                .is_selected(&item)
                                                        }
                                                    };
                                                    let select = {
                                                        let item = item.clone();
                                                        move |_| {
                                                            store_select_item(&store, item.clone())
                                                        }
                                                    };
                                                    view! {
                                                        <div class="item-row">
                                                            <label>
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=checked
                                                                    on:change=select
                                                                />
                                                                <span>
                                                                    {format!(
                                                                        "{} - {}",
                                                                        item.title,
                                                                        item.description,
                                                                    )}
                                                                </span>
                                                            </label>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
