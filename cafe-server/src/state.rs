//! Application state
//!
//! Built once at startup from configuration and shared by reference across
//! request handlers; no per-request mutable state lives here.

use sqlx::SqlitePool;

use crate::auth::{JwtConfig, JwtService};
use crate::config::Config;
use crate::db;
use crate::storage::ImageStorage;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT issue/validate service
    pub jwt: JwtService,
    /// S3-compatible object storage client
    pub storage: ImageStorage,
    /// Upload validation policy
    pub uploads: UploadPolicy,
}

/// Upload validation policy
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Allowed extensions, lowercase without the dot
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: usize,
}

impl UploadPolicy {
    pub fn max_size_mb(&self) -> u64 {
        (self.max_size_bytes / (1024 * 1024)) as u64
    }
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;

        let jwt = JwtService::new(JwtConfig {
            secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            expiration_minutes: config.jwt_expire_minutes,
        });

        let storage = ImageStorage::new(
            &config.storage_endpoint,
            &config.storage_bucket,
            &config.storage_access_key_id,
            &config.storage_secret_access_key,
            &config.storage_public_base_url,
            &config.storage_object_prefix,
        );

        let uploads = UploadPolicy {
            allowed_extensions: config.upload_allowed_extensions.clone(),
            max_size_bytes: (config.upload_max_size_mb as usize) * 1024 * 1024,
        };

        Ok(Self {
            pool,
            jwt,
            storage,
            uploads,
        })
    }
}
