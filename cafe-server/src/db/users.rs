//! Admin user queries
//!
//! The UNIQUE constraint on `username` is the authoritative duplicate
//! guard; callers pre-check only to produce a friendlier error early.

use shared::models::UserPublic;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserRow {
    pub fn into_public(self) -> UserPublic {
        UserPublic {
            id: self.id,
            username: self.username,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<UserRow>> {
    let rows = sqlx::query_as("SELECT * FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as("SELECT * FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as("SELECT * FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn username_exists(pool: &SqlitePool, username: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Uniqueness re-check for renames, excluding the user being updated
pub async fn username_taken_excluding(
    pool: &SqlitePool,
    username: &str,
    user_id: &str,
) -> RepoResult<bool> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT 1 FROM users WHERE username = ?1 AND id != ?2")
            .bind(username)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Racing duplicates surface as a unique-constraint violation here
pub async fn insert(pool: &SqlitePool, user: &UserRow) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO users (id, username, password_hash, role, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &SqlitePool, user: &UserRow) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE users
         SET username = ?1, password_hash = ?2, role = ?3, updated_at = ?4
         WHERE id = ?5",
    )
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(user.updated_at)
    .bind(&user.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
