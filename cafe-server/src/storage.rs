//! S3-compatible object storage (Cloudflare R2)
//!
//! The core only hands bytes over and persists the public URL it gets
//! back. Upload failures are mapped to sanitized, actionable messages;
//! raw credentials and SDK errors never reach the caller.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::ProvideErrorMetadata;
use shared::error::AppError;

/// Object storage client for image uploads
#[derive(Clone)]
pub struct ImageStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
    object_prefix: String,
}

/// Result of a successful upload
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub file_name: String,
    pub key: String,
    pub url: String,
}

impl ImageStorage {
    pub fn new(
        endpoint: &str,
        bucket: &str,
        access_key_id: &str,
        secret_access_key: &str,
        public_base_url: &str,
        object_prefix: &str,
    ) -> Self {
        // R2 wants path-style addressing and a fixed "auto" region
        let credentials = Credentials::new(access_key_id, secret_access_key, None, None, "cafe-r2");
        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(config),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            object_prefix: object_prefix.trim_matches('/').to_string(),
        }
    }

    /// Upload an image and return its public URL. The object key is
    /// `{prefix}/{yyyy}/{mm}/{uuid}.{ext}` (date segments only when a
    /// prefix is configured).
    pub async fn upload_image(
        &self,
        data: Vec<u8>,
        extension: &str,
        content_type: &str,
    ) -> Result<UploadedImage, AppError> {
        let file_name = format!("{}.{extension}", crate::db::new_id());
        let key = if self.object_prefix.is_empty() {
            file_name.clone()
        } else {
            let month = chrono::Utc::now().format("%Y/%m");
            format!("{}/{month}/{file_name}", self.object_prefix)
        };

        let content_type = if content_type.is_empty() {
            "application/octet-stream"
        } else {
            content_type
        };

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(data.into())
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                let code = e.code().unwrap_or_default().to_string();
                tracing::error!(key = %key, code = %code, error = %e, "Object storage upload failed");
                AppError::storage(sanitize_upload_error(&code))
            })?;

        let url = format!("{}/{key}", self.public_base_url);
        tracing::info!(key = %key, "Image uploaded");

        Ok(UploadedImage {
            file_name,
            key,
            url,
        })
    }
}

/// Map an S3 error code to an actionable message safe to return to the
/// caller
fn sanitize_upload_error(code: &str) -> String {
    match code {
        "InvalidAccessKeyId" => {
            "Object storage access key is invalid. Check the storage credentials.".to_string()
        }
        "SignatureDoesNotMatch" => {
            "Object storage signature check failed. Check the secret key and endpoint."
                .to_string()
        }
        "AccessDenied" => {
            "Object storage access denied. Ensure the key has write permission for the bucket."
                .to_string()
        }
        "NoSuchBucket" => {
            "Object storage bucket not found. Check the bucket name.".to_string()
        }
        "NotImplemented" => {
            "Object storage rejected an unsupported S3 feature.".to_string()
        }
        _ => "Object storage upload failed.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_messages_never_echo_the_code_blindly() {
        assert!(sanitize_upload_error("InvalidAccessKeyId").contains("access key"));
        assert!(sanitize_upload_error("NoSuchBucket").contains("bucket"));
        assert_eq!(
            sanitize_upload_error("SomethingInternal"),
            "Object storage upload failed."
        );
    }

    #[test]
    fn object_prefix_is_trimmed() {
        let storage = ImageStorage::new(
            "https://example.r2.cloudflarestorage.com",
            "bucket",
            "key",
            "secret",
            "https://cdn.example.com/",
            "/uploads/",
        );
        assert_eq!(storage.object_prefix, "uploads");
        assert_eq!(storage.public_base_url, "https://cdn.example.com");
    }
}
