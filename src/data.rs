//! Bundled Dataset
//!
//! The catalog ships as static JSON baked into the binary. Parsed once at
//! startup; a malformed asset is an unrecoverable build defect, so parsing
//! panics rather than returning an error.

use crate::models::{Category, FoodItem, FoodsFile};

const FOODS_JSON: &str = include_str!("../assets/foods.json");
const CATEGORIES_JSON: &str = include_str!("../assets/categories.json");

/// All food items, in catalog order.
pub fn load_foods() -> Vec<FoodItem> {
    let file: FoodsFile =
        serde_json::from_str(FOODS_JSON).expect("assets/foods.json is malformed");
    file.foods
}

/// All categories, in display order.
pub fn load_categories() -> Vec<Category> {
    serde_json::from_str(CATEGORIES_JSON).expect("assets/categories.json is malformed")
}
