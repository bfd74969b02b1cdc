//! UI Components
//!
//! Reusable Leptos components.

mod back_to_top;
mod category_bar;
mod food_card;
mod food_grid;
mod search_bar;
mod show_more;

pub use back_to_top::BackToTop;
pub use category_bar::CategoryBar;
pub use food_card::FoodCard;
pub use food_grid::FoodGrid;
pub use search_bar::SearchBar;
pub use show_more::ShowMore;
