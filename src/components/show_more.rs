//! Show More Component
//!
//! Pagination control for the plain feed. Hidden entirely while a search is
//! active; disabled once every page has been loaded.

use leptos::prelude::*;

#[component]
pub fn ShowMore(
    visible: Signal<bool>,
    enabled: Signal<bool>,
    #[prop(into)] on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="show-more-row">
                <button
                    class="show-more"
                    disabled=move || !enabled.get()
                    on:click=move |_| on_load_more.run(())
                >
                    "+ Show More"
                </button>
            </div>
        </Show>
    }
}
