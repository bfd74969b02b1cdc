//! Food Court Frontend App
//!
//! Top-level component. Owns the filter state, derives the visible item
//! sequence from it, and hands the derived flags to the controls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{FilterState, ViewMode};
use crate::components::{BackToTop, CategoryBar, FoodGrid, SearchBar, ShowMore};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    web_sys::console::log_1(
        &format!(
            "[APP] Loaded {} items across {} categories",
            store.foods().read_untracked().len(),
            store.categories().read_untracked().len()
        )
        .into(),
    );

    // Filter state, owned here and mutated only through the catalog ops.
    let (filter, set_filter) = signal(FilterState::new());
    let (searching, set_searching) = signal(false);

    let visible = Memo::new(move |_| filter.get().visible(&store.foods().read()));

    let active_category = Signal::derive(move || match &filter.read().mode {
        ViewMode::Category(id) => Some(*id),
        _ => None,
    });
    let show_more_visible = Signal::derive(move || filter.read().show_more_visible());
    let can_load_more =
        Signal::derive(move || filter.read().can_load_more(store.foods().read().len()));

    // Handlers; search terms arrive here already debounced.
    let on_search = move |term: String| {
        set_filter.update(|f| f.set_search_term(&term));
        set_searching.set(false);
    };
    let on_select_category = move |choice: Option<u32>| {
        set_filter.update(|f| f.set_category(choice));
    };
    let on_load_more = move |_: ()| {
        let len = store.foods().read_untracked().len();
        set_filter.update(|f| f.load_more(len));
    };

    view! {
        <div class="layout">
            <main class="content">
                <SearchBar searching=searching set_searching=set_searching on_search=on_search/>
                <CategoryBar active=active_category on_select=on_select_category/>
                <FoodGrid items=visible/>
                <ShowMore
                    visible=show_more_visible
                    enabled=can_load_more
                    on_load_more=on_load_more
                />
                <p class="item-count">
                    {move || format!("{} items shown", visible.get().len())}
                </p>
            </main>
            <BackToTop/>
        </div>
    }
}
