//! Food Grid Component
//!
//! Card grid over the currently visible items. An empty visible sequence is
//! a valid state and simply renders an empty grid.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::models::FoodItem;

#[component]
pub fn FoodGrid(items: Memo<Vec<FoodItem>>) -> impl IntoView {
    view! {
        <div class="food-grid">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! { <FoodCard item=item/> }
            />
        </div>
    }
}
