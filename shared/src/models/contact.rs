//! Contact info and inbound contact requests

use serde::{Deserialize, Serialize};

use super::branch::OrderLinks;

/// Contact information (singleton: at most one row is used)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: String,
    pub phone: String,
    pub email: String,
    pub social: Option<Social>,
    pub order_links: Option<OrderLinks>,
}

/// Social handles, owned by the contact info
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Upsert payload for contact info; omitted sub-objects become
/// present-but-empty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoUpdate {
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub social: Option<Social>,
    #[serde(default)]
    pub order_links: Option<OrderLinks>,
}

/// Inbound contact request; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: String,
    pub full_name: String,
    pub phone_or_email: String,
    #[serde(rename = "type")]
    pub request_type: String,
    pub message: String,
    pub created_at: i64,
}

/// Create contact request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestCreate {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_or_email: String,
    #[serde(default, rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub message: String,
}

/// Receipt returned to the anonymous submitter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestReceipt {
    pub request_id: String,
    pub created_at: i64,
    pub status: String,
}
