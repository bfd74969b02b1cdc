//! Catalog Models
//!
//! Data structures matching the bundled JSON assets.

use serde::{Deserialize, Serialize};

/// Promotion tag carried by some food items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    #[serde(rename = "1+1")]
    OnePlusOne,
    #[serde(rename = "gift")]
    Gift,
    #[serde(rename = "discount")]
    Discount,
}

/// One food item card (matches assets/foods.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub restaurant_name: String,
    pub category_id: u32,
    pub rating: f32,
    pub min_cook_time: u32,
    pub max_cook_time: u32,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
}

/// Food category (matches assets/categories.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Wrapper object shape of assets/foods.json
#[derive(Debug, Clone, Deserialize)]
pub struct FoodsFile {
    pub foods: Vec<FoodItem>,
}
