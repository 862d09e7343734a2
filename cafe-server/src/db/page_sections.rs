//! Page section queries (one logical row per page key)

use shared::models::page_section::normalize_tags;
use shared::models::{PageKey, PageSection, PageSectionUpsert};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, new_id};

#[derive(sqlx::FromRow)]
pub struct PageSectionRow {
    pub page_key: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: String,
}

impl PageSectionRow {
    fn into_model(self) -> RepoResult<PageSection> {
        let page_key = PageKey::parse(&self.page_key)
            .ok_or_else(|| RepoError::Corrupt(format!("page_sections.page_key: {}", self.page_key)))?;
        let tags: Vec<String> = serde_json::from_str(&self.tags)
            .map_err(|e| RepoError::Corrupt(format!("page_sections.tags: {e}")))?;
        Ok(PageSection {
            page_key,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            tags,
        })
    }
}

pub async fn find_by_key(pool: &SqlitePool, key: PageKey) -> RepoResult<Option<PageSection>> {
    let row: Option<PageSectionRow> = sqlx::query_as(
        "SELECT page_key, title, description, image_url, tags
         FROM page_sections WHERE page_key = ?1",
    )
    .bind(key.as_str())
    .fetch_optional(pool)
    .await?;
    row.map(PageSectionRow::into_model).transpose()
}

/// Upsert keyed by the page key (UNIQUE constraint). Tags are normalized
/// on write: trimmed, blanks dropped, case-insensitive duplicates collapsed
pub async fn upsert(
    pool: &SqlitePool,
    key: PageKey,
    data: &PageSectionUpsert,
) -> RepoResult<PageSection> {
    let tags = normalize_tags(&data.tags);
    let tags_json = serde_json::to_string(&tags)
        .map_err(|e| RepoError::Corrupt(format!("page_sections.tags: {e}")))?;

    sqlx::query(
        "INSERT INTO page_sections (id, page_key, title, description, image_url, tags)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(page_key) DO UPDATE SET
             title = excluded.title,
             description = excluded.description,
             image_url = excluded.image_url,
             tags = excluded.tags",
    )
    .bind(new_id())
    .bind(key.as_str())
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(&tags_json)
    .execute(pool)
    .await?;

    Ok(PageSection {
        page_key: key,
        title: data.title.clone(),
        description: data.description.clone(),
        image_url: data.image_url.clone(),
        tags,
    })
}
