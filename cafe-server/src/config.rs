//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Café server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (e.g. `sqlite:cafe.db`)
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// JWT signing secret; tokens cannot be issued without it
    pub jwt_secret: String,
    /// JWT issuer claim
    pub jwt_issuer: String,
    /// JWT audience claim
    pub jwt_audience: String,
    /// Token lifetime in minutes
    pub jwt_expire_minutes: i64,
    /// S3-compatible endpoint (Cloudflare R2)
    pub storage_endpoint: String,
    /// Target bucket
    pub storage_bucket: String,
    pub storage_access_key_id: String,
    pub storage_secret_access_key: String,
    /// Public base URL returned for uploaded objects
    pub storage_public_base_url: String,
    /// Optional key prefix for uploaded objects
    pub storage_object_prefix: String,
    /// Allowed image extensions, lowercase without the dot
    pub upload_allowed_extensions: Vec<String>,
    /// Maximum accepted image size in megabytes
    pub upload_max_size_mb: u64,
}

const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

impl Config {
    /// Require a secret env var: must be set and non-empty in
    /// non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Token issuance fails fast on missing signing material
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set")?;
        let jwt_issuer = std::env::var("JWT_ISSUER").map_err(|_| "JWT_ISSUER must be set")?;
        let jwt_audience = std::env::var("JWT_AUDIENCE").map_err(|_| "JWT_AUDIENCE must be set")?;
        if jwt_secret.is_empty() || jwt_issuer.is_empty() || jwt_audience.is_empty() {
            return Err("JWT_SECRET, JWT_ISSUER and JWT_AUDIENCE must not be empty".into());
        }

        let upload_allowed_extensions = std::env::var("UPLOAD_ALLOWED_EXTENSIONS")
            .map(|raw| {
                raw.split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect::<Vec<_>>()
            })
            .ok()
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_IMAGE_EXTENSIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cafe.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            jwt_expire_minutes: std::env::var("JWT_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            storage_endpoint: Self::require_secret("STORAGE_ENDPOINT", &environment)?,
            storage_bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "cafe-images".into()),
            storage_access_key_id: Self::require_secret("STORAGE_ACCESS_KEY_ID", &environment)?,
            storage_secret_access_key: Self::require_secret(
                "STORAGE_SECRET_ACCESS_KEY",
                &environment,
            )?,
            storage_public_base_url: Self::require_secret(
                "STORAGE_PUBLIC_BASE_URL",
                &environment,
            )?,
            storage_object_prefix: std::env::var("STORAGE_OBJECT_PREFIX")
                .unwrap_or_else(|_| "uploads".into()),
            upload_allowed_extensions,
            upload_max_size_mb: std::env::var("UPLOAD_MAX_SIZE_MB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            environment,
        })
    }
}
