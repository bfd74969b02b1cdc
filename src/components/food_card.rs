//! Food Card Component
//!
//! One catalog card: cover image with an optional promotion badge, dish
//! name, star rating, and cook-time range.

use leptos::prelude::*;

use crate::models::{FoodItem, Promotion};

/// Badge overlay for promoted items. Items without a promotion get nothing.
fn promotion_badge(promotion: Option<Promotion>) -> AnyView {
    match promotion {
        Some(Promotion::OnePlusOne) => {
            view! { <div class="promo-badge promo-one-plus-one">"1 + 1"</div> }.into_any()
        }
        Some(Promotion::Gift) => {
            view! { <div class="promo-badge promo-gift">"🎁"</div> }.into_any()
        }
        Some(Promotion::Discount) => {
            view! { <div class="promo-badge promo-discount">"%"</div> }.into_any()
        }
        None => view! { <div></div> }.into_any(),
    }
}

/// Single food item card
#[component]
pub fn FoodCard(item: FoodItem) -> impl IntoView {
    let cover_style = format!("background-image: url({})", item.image_url);
    let cook_time = format!("{}-{} min", item.min_cook_time, item.max_cook_time);
    let rating = format!("{:.1}", item.rating);

    view! {
        <div class="food-card">
            <div class="food-card-cover" style=cover_style>
                {promotion_badge(item.promotion)}
            </div>
            <div class="food-card-body">
                <span class="food-card-name">{item.name.clone()}</span>
                <span class="food-card-restaurant">{item.restaurant_name.clone()}</span>
                <div class="food-card-meta">
                    <span class="food-card-rating">"★ " {rating}</span>
                    <span class="food-card-cook-time">{cook_time}</span>
                </div>
            </div>
        </div>
    }
}
