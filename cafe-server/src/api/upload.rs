//! Image upload endpoint
//!
//! Validates extension and size, then forwards the bytes to the object
//! storage collaborator. The handler future is dropped when the caller
//! disconnects, which aborts the in-flight upload.

use axum::Json;
use axum::extract::{Multipart, State};
use shared::error::{ApiResult, AppError};
use shared::response::{ApiResponse, ok};

use crate::state::AppState;
use crate::storage::UploadedImage;

/// POST /api/v1/uploads/image - multipart `file`
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ApiResponse<UploadedImage>>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name = String::new();
    let mut content_type = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or_default();
        if name == "file" || name.is_empty() {
            file_name = field.file_name().unwrap_or_default().to_string();
            content_type = field.content_type().unwrap_or_default().to_string();
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?
                    .to_vec(),
            );
            break;
        }
    }

    let data = file_data.filter(|d| !d.is_empty()).ok_or_else(|| {
        AppError::validation("Image file is required.")
    })?;

    let extension = std::path::Path::new(&file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !state
        .uploads
        .allowed_extensions
        .iter()
        .any(|allowed| allowed == &extension)
    {
        return Err(AppError::validation(format!(
            "Invalid image format. Allowed: {}",
            state.uploads.allowed_extensions.join(", ")
        )));
    }

    if data.len() > state.uploads.max_size_bytes {
        return Err(AppError::validation(format!(
            "Image size cannot exceed {} MB.",
            state.uploads.max_size_mb()
        )));
    }

    let uploaded = state
        .storage
        .upload_image(data, &extension, &content_type)
        .await?;

    Ok(ok(uploaded))
}
