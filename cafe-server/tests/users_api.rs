//! User/auth API: registration, duplicate usernames, login behavior and
//! the self-or-elevated-role authorization rule

mod common;

use common::{admin_token, register_and_login, request, send, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn registration_requires_username_and_password() {
    let (app, _state) = test_app().await;

    for body in [
        json!({ "username": "", "password": "secret" }),
        json!({ "username": "ada", "password": "" }),
        json!({}),
    ] {
        let (status, response) =
            send(&app, request("POST", "/api/v1/users", None, Some(body))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let (app, _state) = test_app().await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/users",
            None,
            Some(json!({ "username": "ada", "password": "pw-one" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "User");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/users",
            None,
            Some(json!({ "username": "ada", "password": "pw-two" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn login_failure_is_generic_for_unknown_user_and_bad_password() {
    let (app, _state) = test_app().await;
    register_and_login(&app, "ada", "correct-password", None).await;

    let unknown = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "nobody", "password": "x" })),
        ),
    )
    .await;
    let wrong = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "ada", "password": "wrong" })),
        ),
    )
    .await;

    assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
    // identical envelope: the response must not reveal whether the
    // username exists
    assert_eq!(unknown.1, wrong.1);
}

#[tokio::test]
async fn login_returns_bearer_token() {
    let (app, _state) = test_app().await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/users",
            None,
            Some(json!({ "username": "ada", "password": "secret-password" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "ada", "password": "secret-password" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tokenType"], "Bearer");
    assert!(body["data"]["token"].as_str().expect("token").contains('.'));
    assert!(body["data"]["expiresAt"].as_i64().expect("expiresAt") > 0);
}

#[tokio::test]
async fn user_listing_is_admin_only() {
    let (app, _state) = test_app().await;
    let staff = register_and_login(&app, "staff", "staff-password", None).await;

    let (status, _) = send(&app, request("GET", "/api/v1/users", Some(&staff), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = admin_token(&app).await;
    let (status, body) = send(&app, request("GET", "/api/v1/users", Some(&admin), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("users").len(), 2);
}

#[tokio::test]
async fn self_service_update_rules() {
    let (app, state) = test_app().await;
    let _other = send(
        &app,
        request(
            "POST",
            "/api/v1/users",
            None,
            Some(json!({ "username": "other", "password": "other-password" })),
        ),
    )
    .await;
    let staff = register_and_login(&app, "staff", "staff-password", None).await;

    let other_id: (String,) = sqlx::query_as("SELECT id FROM users WHERE username = 'other'")
        .fetch_one(&state.pool)
        .await
        .expect("other id");
    let staff_id: (String,) = sqlx::query_as("SELECT id FROM users WHERE username = 'staff'")
        .fetch_one(&state.pool)
        .await
        .expect("staff id");

    // a non-elevated caller may not touch another account
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", other_id.0),
            Some(&staff),
            Some(json!({ "username": "hijacked" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // self-update works, but the role change is ignored
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", staff_id.0),
            Some(&staff),
            Some(json!({ "username": "staff-renamed", "role": "Admin" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "staff-renamed");
    assert_eq!(body["data"]["role"], "User");

    // renaming onto a taken username is rejected
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", staff_id.0),
            Some(&staff),
            Some(json!({ "username": "other" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn admin_may_update_role_and_delete_others() {
    let (app, state) = test_app().await;
    let admin = admin_token(&app).await;
    let _ = register_and_login(&app, "staff", "staff-password", None).await;

    let staff_id: (String,) = sqlx::query_as("SELECT id FROM users WHERE username = 'staff'")
        .fetch_one(&state.pool)
        .await
        .expect("staff id");

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/users/{}", staff_id.0),
            Some(&admin),
            Some(json!({ "role": "Admin" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "Admin");

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/users/{}", staff_id.0),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/users/{}", staff_id.0),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_elevated_caller_may_not_delete_another_account() {
    let (app, state) = test_app().await;
    let staff = register_and_login(&app, "staff", "staff-password", None).await;
    let _ = send(
        &app,
        request(
            "POST",
            "/api/v1/users",
            None,
            Some(json!({ "username": "other", "password": "other-password" })),
        ),
    )
    .await;

    let other_id: (String,) = sqlx::query_as("SELECT id FROM users WHERE username = 'other'")
        .fetch_one(&state.pool)
        .await
        .expect("other id");

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/users/{}", other_id.0),
            Some(&staff),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
