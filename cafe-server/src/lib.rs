//! Café content-management backend
//!
//! REST API for a café's public data: menus, categories, products with
//! nutrition facts, branches with working hours and delivery links,
//! contact info, inbound contact requests, editable page sections and
//! admin accounts with role-based access.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
pub mod storage;

pub use config::Config;
pub use state::AppState;
