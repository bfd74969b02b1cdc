//! Category Bar Component
//!
//! Radio-style row of category buttons: "All" plus one button per category,
//! with the active choice highlighted.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Category chooser row
///
/// `active` is `None` when the plain paginated feed ("All") is showing.
#[component]
pub fn CategoryBar(
    active: Signal<Option<u32>>,
    #[prop(into)] on_select: Callback<Option<u32>>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="category-bar">
            <button
                class=move || {
                    if active.get().is_none() { "category-btn active" } else { "category-btn" }
                }
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            <For
                each=move || store.categories().get()
                key=|category| category.id
                children=move |category| {
                    let id = category.id;
                    let is_active = move || active.get() == Some(id);
                    let btn_class = move || {
                        if is_active() { "category-btn active" } else { "category-btn" }
                    };

                    view! {
                        <button class=btn_class on:click=move |_| on_select.run(Some(id))>
                            {category.name.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
