//! Search Bar Component
//!
//! Restaurant-name search input with a 2-second debounce. Every keystroke
//! re-arms the pending evaluation and lights the spinner; clearing the input
//! skips the debounce and reverts to the paginated feed immediately.

use leptos::prelude::*;

use crate::debounce::{search_debouncer, Debouncer, TimeoutScheduler};

/// Debounced search input
///
/// Props:
/// - searching: spinner flag, true while an evaluation is pending
/// - set_searching: raised on keystroke, cleared by the parent once the
///   debounced term has been applied
/// - on_search: callback receiving the settled term ("" for cleared)
#[component]
pub fn SearchBar(
    searching: ReadSignal<bool>,
    set_searching: WriteSignal<bool>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    // Timeout handles are not Send, so the debouncer lives in local storage.
    let debouncer: StoredValue<Debouncer<TimeoutScheduler>, LocalStorage> =
        StoredValue::new_local(search_debouncer());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_input_value.set(value.clone());

        if value.is_empty() {
            // Fast path: clearing the box drops any pending search and
            // restores the current page without waiting out the quiet window.
            debouncer.update_value(|d| d.cancel());
            set_searching.set(false);
            on_search.run(String::new());
        } else {
            set_searching.set(true);
            debouncer.update_value(|d| d.call(move || on_search.run(value)));
        }
    };

    on_cleanup(move || debouncer.update_value(|d| d.cancel()));

    view! {
        <div class="search-row">
            <input
                type="text"
                class="search-input"
                placeholder="Enter restaurant name..."
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=on_input
            />
            <Show when=move || searching.get()>
                <span class="search-spinner" aria-hidden="true"></span>
            </Show>
        </div>
    }
}
