//! Product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Optional category reference; nulled when the category is deleted
    pub category_id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    pub in_stock: bool,
    pub image_url: String,
}

/// Nutrition facts, owned by the product. Absent as a whole when the
/// product carries no nutrition data; `macros`/`details` can each be
/// absent or present-but-empty independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub calories_kcal: Option<i32>,
    #[serde(default)]
    pub macros: Option<Macros>,
    #[serde(default)]
    pub details: Option<NutritionDetails>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub protein_g: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub carbs_g: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fat_g: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionDetails {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub sugar_g: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub fiber_g: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub sodium_mg: Option<Decimal>,
    #[serde(default)]
    pub energy_kj: Option<i32>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// Update product payload (whole-record replacement; omitted nutrition
/// clears the stored nutrition)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// Product as nested under a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBrief {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discounted_price: Option<Decimal>,
    pub in_stock: bool,
    pub image_url: String,
}

/// Product list view: product plus its linked category, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}

/// Product detail view: nutrition facts plus linked category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub nutrition: Option<Nutrition>,
    pub category: Option<Category>,
}

/// Link request body: attach a product to a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLinkBody {
    #[serde(default)]
    pub product_id: String,
}

/// Result of a category↔product link operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductLink {
    pub category_id: String,
    pub product_id: String,
}
