//! Category model

use serde::{Deserialize, Serialize};

use super::menu::Menu;
use super::product::ProductBrief;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Optional menu reference; nulled when the menu is deleted
    pub menu_id: Option<String>,
    pub name: String,
    pub order: i64,
    pub image_url: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub image_url: String,
}

/// Update category payload (whole-record replacement)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub image_url: String,
}

/// Category as nested under a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBrief {
    pub id: String,
    pub name: String,
    pub order: i64,
    pub image_url: String,
}

/// Category list view: category plus its linked menu, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: Category,
    pub menu: Option<Menu>,
}

/// Category with its products (menu tree and per-menu listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<ProductBrief>,
}

/// Link request body: attach a category to a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLinkBody {
    #[serde(default)]
    pub category_id: String,
}

/// Link request body: attach a menu to a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLinkBody {
    #[serde(default)]
    pub menu_id: String,
}

/// Result of a menu↔category link operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryLink {
    pub menu_id: String,
    pub category_id: String,
}
