//! Contact info queries (singleton: the first row is the one in use)

use shared::models::{ContactInfo, ContactInfoUpdate};
use sqlx::SqlitePool;

use super::{RepoResult, decode_json, encode_json, new_id};

#[derive(sqlx::FromRow)]
pub struct ContactInfoRow {
    pub id: String,
    pub phone: String,
    pub email: String,
    pub social: Option<String>,
    pub order_links: Option<String>,
}

impl ContactInfoRow {
    fn into_model(self) -> RepoResult<ContactInfo> {
        Ok(ContactInfo {
            social: decode_json(self.social, "contact_info.social")?,
            order_links: decode_json(self.order_links, "contact_info.order_links")?,
            id: self.id,
            phone: self.phone,
            email: self.email,
        })
    }
}

pub async fn find_first(pool: &SqlitePool) -> RepoResult<Option<ContactInfo>> {
    let row: Option<ContactInfoRow> = sqlx::query_as("SELECT * FROM contact_info LIMIT 1")
        .fetch_optional(pool)
        .await?;
    row.map(ContactInfoRow::into_model).transpose()
}

/// Create-if-absent else overwrite-in-place. Omitted sub-objects become
/// present-but-empty
pub async fn upsert(pool: &SqlitePool, data: &ContactInfoUpdate) -> RepoResult<ContactInfo> {
    let social = Some(data.social.clone().unwrap_or_default());
    let order_links = Some(data.order_links.clone().unwrap_or_default());
    let social_json = encode_json(&social, "contact_info.social")?;
    let order_links_json = encode_json(&order_links, "contact_info.order_links")?;

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM contact_info LIMIT 1")
        .fetch_optional(pool)
        .await?;

    let id = match existing {
        Some((id,)) => {
            sqlx::query(
                "UPDATE contact_info
                 SET phone = ?1, email = ?2, social = ?3, order_links = ?4
                 WHERE id = ?5",
            )
            .bind(&data.phone)
            .bind(&data.email)
            .bind(&social_json)
            .bind(&order_links_json)
            .bind(&id)
            .execute(pool)
            .await?;
            id
        }
        None => {
            let id = new_id();
            sqlx::query(
                "INSERT INTO contact_info (id, phone, email, social, order_links)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&id)
            .bind(&data.phone)
            .bind(&data.email)
            .bind(&social_json)
            .bind(&order_links_json)
            .execute(pool)
            .await?;
            id
        }
    };

    Ok(ContactInfo {
        id,
        phone: data.phone.clone(),
        email: data.email.clone(),
        social,
        order_links,
    })
}
