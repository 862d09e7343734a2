//! Shared types for the café backend
//!
//! Wire models, the response envelope and the unified API error type used
//! by the server and by API consumers.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
