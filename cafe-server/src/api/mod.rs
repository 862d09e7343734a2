//! API routes
//!
//! Route groups per entity with a per-route auth policy: reads and the
//! public contact form are anonymous, mutations need a bearer token, and
//! category creation plus the user listing need the elevated role.

pub mod auth;
pub mod branches;
pub mod categories;
pub mod contact;
pub mod health;
pub mod menus;
pub mod page_sections;
pub mod products;
pub mod upload;
pub mod users;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};
use serde::Serialize;
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::middleware::{require_admin, require_auth};
use crate::db::RepoError;
use crate::state::AppState;

/// Repository failures never reach the caller raw
pub(crate) fn internal(err: RepoError) -> AppError {
    AppError::database(err.to_string())
}

/// Body of entity delete responses
#[derive(Debug, Serialize)]
pub(crate) struct Deleted {
    pub deleted: bool,
    pub id: String,
}

/// Create the combined router
pub fn router(state: AppState) -> Router {
    // Anonymous reads plus the public contact form, login and registration
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/menus", get(menus::list))
        .route("/menus/{id}", get(menus::get_by_id))
        .route("/menus/{id}/categories", get(categories::list_by_menu))
        .route("/categories", get(categories::list))
        .route("/categories/{id}", get(categories::get_by_id))
        .route("/categories/{id}/products", get(products::list_by_category))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get_by_id))
        .route("/branches", get(branches::list))
        .route("/branches/{id}", get(branches::get_by_id))
        .route("/contact/info", get(contact::get_info))
        .route("/contact/requests", post(contact::create_request))
        .route("/page-sections/{key}", get(page_sections::get_by_key))
        .route("/auth/login", post(auth::login))
        .route("/users", post(users::register));

    // Bearer-token mutations
    let protected = Router::new()
        .route("/menus", post(menus::create))
        .route("/menus/{id}", put(menus::update).delete(menus::delete))
        .route("/menus/{id}/category-links", post(categories::link_to_menu))
        .route(
            "/menus/{id}/category-links/{category_id}",
            delete(categories::unlink_from_menu),
        )
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::delete),
        )
        .route(
            "/categories/{id}/menu-link",
            post(categories::link_menu).delete(categories::unlink_menu),
        )
        .route(
            "/categories/{id}/product-links",
            post(products::link_to_category),
        )
        .route(
            "/categories/{id}/product-links/{product_id}",
            delete(products::unlink_from_category),
        )
        .route("/categories/{id}/products", post(products::create_in_category))
        .route("/products", post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route(
            "/products/{id}/category-link",
            post(products::link_category).delete(products::unlink_category),
        )
        .route("/branches", post(branches::create))
        .route(
            "/branches/{id}",
            put(branches::update).delete(branches::delete),
        )
        .route("/contact/info", put(contact::upsert_info))
        .route("/contact/requests", get(contact::list_requests))
        .route("/page-sections/{key}", put(page_sections::upsert))
        .route(
            "/uploads/image",
            post(upload::upload_image)
                // multipart framing needs headroom above the image limit
                .layer(DefaultBodyLimit::max(
                    state.uploads.max_size_bytes + 1024 * 1024,
                )),
        )
        .route(
            "/users/{id}",
            put(users::update).delete(users::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    // Elevated role required
    let admin = Router::new()
        .route("/categories", post(categories::create))
        .route("/menus/{id}/categories", post(categories::create_in_menu))
        .route("/users", get(users::list))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected).merge(admin))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
