//! Database bootstrap and constraint-level guarantees

mod common;

use cafe_server::db::{self, users::UserRow};
use shared::util::now_millis;
use tempfile::TempDir;

#[tokio::test]
async fn connect_creates_database_and_applies_migrations() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cafe.db");
    let url = format!("sqlite:{}", path.display());

    let pool = db::connect(&url).await.expect("connect");

    let (menus,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menus")
        .fetch_one(&pool)
        .await
        .expect("menus table");
    assert_eq!(menus, 0);

    let (foreign_keys,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .expect("pragma");
    assert_eq!(foreign_keys, 1);
}

#[tokio::test]
async fn username_unique_constraint_is_authoritative() {
    // Bypass the application pre-check entirely: the second insert must
    // fail at the constraint
    let pool = common::test_pool().await;
    let now = now_millis();

    let first = UserRow {
        id: db::new_id(),
        username: "ada".to_string(),
        password_hash: "hash-one".to_string(),
        role: "User".to_string(),
        created_at: now,
        updated_at: now,
    };
    let second = UserRow {
        id: db::new_id(),
        username: "ada".to_string(),
        password_hash: "hash-two".to_string(),
        role: "User".to_string(),
        created_at: now,
        updated_at: now,
    };

    db::users::insert(&pool, &first).await.expect("first insert");
    let err = db::users::insert(&pool, &second)
        .await
        .expect_err("duplicate must fail");
    assert!(err.is_unique_violation());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'ada'")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn page_key_unique_constraint_holds() {
    let pool = common::test_pool().await;

    sqlx::query("INSERT INTO page_sections (id, page_key) VALUES ('a', 'menu')")
        .execute(&pool)
        .await
        .expect("first row");
    let err = sqlx::query("INSERT INTO page_sections (id, page_key) VALUES ('b', 'menu')")
        .execute(&pool)
        .await
        .expect_err("duplicate page_key must fail");
    let is_unique = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    );
    assert!(is_unique);
}
