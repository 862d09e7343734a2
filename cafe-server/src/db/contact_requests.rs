//! Inbound contact request queries; rows are immutable once created

use shared::models::{ContactRequest, ContactRequestCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoResult, new_id};

#[derive(sqlx::FromRow)]
pub struct ContactRequestRow {
    pub id: String,
    pub full_name: String,
    pub phone_or_email: String,
    #[sqlx(rename = "type")]
    pub request_type: String,
    pub message: String,
    pub created_at: i64,
}

impl ContactRequestRow {
    fn into_model(self) -> ContactRequest {
        ContactRequest {
            id: self.id,
            full_name: self.full_name,
            phone_or_email: self.phone_or_email,
            request_type: self.request_type,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// `created_at` is set server-side at the creation instant
pub async fn insert(pool: &SqlitePool, data: &ContactRequestCreate) -> RepoResult<ContactRequest> {
    let request = ContactRequest {
        id: new_id(),
        full_name: data.full_name.clone(),
        phone_or_email: data.phone_or_email.clone(),
        request_type: data.request_type.clone(),
        message: data.message.clone(),
        created_at: now_millis(),
    };
    sqlx::query(
        "INSERT INTO contact_requests (id, full_name, phone_or_email, type, message, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&request.id)
    .bind(&request.full_name)
    .bind(&request.phone_or_email)
    .bind(&request.request_type)
    .bind(&request.message)
    .bind(request.created_at)
    .execute(pool)
    .await?;
    Ok(request)
}

/// Newest first
pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<ContactRequest>> {
    let rows: Vec<ContactRequestRow> =
        sqlx::query_as("SELECT * FROM contact_requests ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(ContactRequestRow::into_model).collect())
}
