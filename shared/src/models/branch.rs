//! Branch model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Branch entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub city: String,
    pub district: String,
    pub is_open: bool,
    pub location: Option<Location>,
    pub working_hours: Vec<WorkingHour>,
    /// Present-but-empty by default; absent only when explicitly stored so
    pub order_links: Option<OrderLinks>,
}

/// Geographic coordinates, owned by the branch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(with = "rust_decimal::serde::float")]
    pub lat: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub lon: Decimal,
}

/// One working-hours entry (one row per day-of-week entry, branch-owned)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHour {
    pub day: String,
    #[serde(default = "default_true")]
    pub is_open: bool,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

fn default_true() -> bool {
    true
}

/// Delivery platform links, owned by a branch or by the contact info
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinks {
    #[serde(default)]
    pub yemeksepeti: Option<String>,
    #[serde(default)]
    pub getir: Option<String>,
    #[serde(default)]
    pub trendyol_yemek: Option<String>,
}

/// Create branch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCreate {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub working_hours: Option<Vec<WorkingHour>>,
    #[serde(default)]
    pub order_links: Option<OrderLinks>,
}

/// Update branch payload (whole-record replacement; the working-hours set
/// is replaced wholesale, never merged)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchUpdate {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub working_hours: Option<Vec<WorkingHour>>,
    #[serde(default)]
    pub order_links: Option<OrderLinks>,
}
