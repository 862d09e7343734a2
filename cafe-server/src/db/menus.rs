//! Menu queries

use shared::models::{Menu, MenuCreate, MenuUpdate};
use sqlx::SqlitePool;

use super::{RepoResult, new_id};

#[derive(sqlx::FromRow)]
pub struct MenuRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub active: bool,
}

impl MenuRow {
    pub fn into_model(self) -> Menu {
        Menu {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            active: self.active,
        }
    }
}

pub async fn list(pool: &SqlitePool, active: Option<bool>) -> RepoResult<Vec<Menu>> {
    let rows: Vec<MenuRow> = match active {
        Some(flag) => {
            sqlx::query_as("SELECT * FROM menus WHERE active = ?1")
                .bind(flag)
                .fetch_all(pool)
                .await?
        }
        None => sqlx::query_as("SELECT * FROM menus").fetch_all(pool).await?,
    };
    Ok(rows.into_iter().map(MenuRow::into_model).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Menu>> {
    let row: Option<MenuRow> = sqlx::query_as("SELECT * FROM menus WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(MenuRow::into_model))
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM menus WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn insert(pool: &SqlitePool, data: &MenuCreate) -> RepoResult<Menu> {
    let menu = Menu {
        id: new_id(),
        title: data.title.clone(),
        description: data.description.clone(),
        image_url: data.image_url.clone(),
        active: data.active,
    };
    sqlx::query(
        "INSERT INTO menus (id, title, description, image_url, active)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&menu.id)
    .bind(&menu.title)
    .bind(&menu.description)
    .bind(&menu.image_url)
    .bind(menu.active)
    .execute(pool)
    .await?;
    Ok(menu)
}

/// Whole-record replacement; returns false when the id is unknown
pub async fn update(pool: &SqlitePool, id: &str, data: &MenuUpdate) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE menus SET title = ?1, description = ?2, image_url = ?3, active = ?4
         WHERE id = ?5",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(data.active)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Hard delete; linked categories keep existing with a nulled menu
/// reference (ON DELETE SET NULL)
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM menus WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
