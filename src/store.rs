//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dataset is
//! loaded once at mount and never mutated afterwards.

use crate::data;
use crate::models::{Category, FoodItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full catalog, in dataset order
    pub foods: Vec<FoodItem>,
    /// All categories, in display order
    pub categories: Vec<Category>,
}

impl AppState {
    /// Load the bundled dataset.
    pub fn new() -> Self {
        Self {
            foods: data::load_foods(),
            categories: data::load_categories(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
