//! Request authentication middleware
//!
//! [`require_auth`] validates the bearer token and injects [`CurrentUser`]
//! into request extensions; [`require_admin`] additionally gates on the
//! elevated role and must run after it.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use shared::error::AppError;

use super::jwt::CurrentUser;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::invalid_token("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Invalid Authorization format"))?;

    let claims = state.jwt.validate(token).map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::invalid_token("Invalid or expired token")
    })?;

    request.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(request).await)
}

pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let is_admin = request
        .extensions()
        .get::<CurrentUser>()
        .is_some_and(CurrentUser::is_admin);

    if !is_admin {
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}
