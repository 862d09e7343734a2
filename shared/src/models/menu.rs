//! Menu model

use serde::{Deserialize, Serialize};

use super::category::{CategoryBrief, CategoryWithProducts};

/// Menu entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub active: bool,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub active: bool,
}

/// Update menu payload (whole-record replacement)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub active: bool,
}

/// Menu list view: menu plus its categories, ordered by `order`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuWithCategories {
    #[serde(flatten)]
    pub menu: Menu,
    pub categories: Vec<CategoryBrief>,
}

/// Menu detail view: the full categories→products tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTree {
    #[serde(flatten)]
    pub menu: Menu,
    pub categories: Vec<CategoryWithProducts>,
}
