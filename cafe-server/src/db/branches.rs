//! Branch queries
//!
//! Working hours are a branch-owned child table: cascade-deleted with the
//! branch and replaced wholesale (delete-all-then-reinsert) on update, in
//! the same transaction as the branch row.

use std::collections::HashMap;

use shared::models::{Branch, BranchCreate, BranchUpdate, WorkingHour};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoResult, decode_json, encode_json, new_id};

#[derive(sqlx::FromRow)]
pub struct BranchRow {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub city: String,
    pub district: String,
    pub is_open: bool,
    pub location: Option<String>,
    pub order_links: Option<String>,
}

#[derive(sqlx::FromRow)]
pub struct WorkingHourRow {
    pub branch_id: String,
    pub day: String,
    pub is_open: bool,
    pub open_time: String,
    pub close_time: String,
}

impl BranchRow {
    fn into_model(self, working_hours: Vec<WorkingHour>) -> RepoResult<Branch> {
        Ok(Branch {
            location: decode_json(self.location, "branches.location")?,
            order_links: decode_json(self.order_links, "branches.order_links")?,
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            city: self.city,
            district: self.district,
            is_open: self.is_open,
            working_hours,
        })
    }
}

impl WorkingHourRow {
    fn into_model(self) -> WorkingHour {
        WorkingHour {
            day: self.day,
            is_open: self.is_open,
            open: self.open_time,
            close: self.close_time,
        }
    }
}

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<Branch>> {
    let rows: Vec<BranchRow> = sqlx::query_as("SELECT * FROM branches").fetch_all(pool).await?;
    let hour_rows: Vec<WorkingHourRow> = sqlx::query_as(
        "SELECT branch_id, day, is_open, open_time, close_time
         FROM branch_working_hours ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut hours_by_branch: HashMap<String, Vec<WorkingHour>> = HashMap::new();
    for row in hour_rows {
        hours_by_branch
            .entry(row.branch_id.clone())
            .or_default()
            .push(row.into_model());
    }

    rows.into_iter()
        .map(|row| {
            let hours = hours_by_branch.remove(&row.id).unwrap_or_default();
            row.into_model(hours)
        })
        .collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Branch>> {
    let row: Option<BranchRow> = sqlx::query_as("SELECT * FROM branches WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let hour_rows: Vec<WorkingHourRow> = sqlx::query_as(
        "SELECT branch_id, day, is_open, open_time, close_time
         FROM branch_working_hours WHERE branch_id = ?1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let hours = hour_rows.into_iter().map(WorkingHourRow::into_model).collect();
    Ok(Some(row.into_model(hours)?))
}

async fn insert_hours(
    tx: &mut Transaction<'_, Sqlite>,
    branch_id: &str,
    hours: &[WorkingHour],
) -> RepoResult<()> {
    for hour in hours {
        sqlx::query(
            "INSERT INTO branch_working_hours (branch_id, day, is_open, open_time, close_time)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(branch_id)
        .bind(&hour.day)
        .bind(hour.is_open)
        .bind(&hour.open)
        .bind(&hour.close)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

pub async fn insert(pool: &SqlitePool, data: &BranchCreate) -> RepoResult<Branch> {
    let id = new_id();
    // Omitted order links become present-but-empty
    let order_links = Some(data.order_links.clone().unwrap_or_default());
    let working_hours = data.working_hours.clone().unwrap_or_default();

    let location_json = encode_json(&data.location, "branches.location")?;
    let order_links_json = encode_json(&order_links, "branches.order_links")?;

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO branches (id, name, image_url, city, district, is_open, location, order_links)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(&id)
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(&data.city)
    .bind(&data.district)
    .bind(data.is_open)
    .bind(&location_json)
    .bind(&order_links_json)
    .execute(&mut *tx)
    .await?;
    insert_hours(&mut tx, &id, &working_hours).await?;
    tx.commit().await?;

    Ok(Branch {
        id,
        name: data.name.clone(),
        image_url: data.image_url.clone(),
        city: data.city.clone(),
        district: data.district.clone(),
        is_open: data.is_open,
        location: data.location.clone(),
        working_hours,
        order_links,
    })
}

/// Whole-record replacement. The previous working-hours set is deleted and
/// the supplied one reinserted; both writes commit together or not at all
pub async fn update(pool: &SqlitePool, id: &str, data: &BranchUpdate) -> RepoResult<bool> {
    let order_links = Some(data.order_links.clone().unwrap_or_default());
    let working_hours = data.working_hours.clone().unwrap_or_default();

    let location_json = encode_json(&data.location, "branches.location")?;
    let order_links_json = encode_json(&order_links, "branches.order_links")?;

    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE branches
         SET name = ?1, image_url = ?2, city = ?3, district = ?4, is_open = ?5,
             location = ?6, order_links = ?7
         WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(&data.city)
    .bind(&data.district)
    .bind(data.is_open)
    .bind(&location_json)
    .bind(&order_links_json)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }

    sqlx::query("DELETE FROM branch_working_hours WHERE branch_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insert_hours(&mut tx, id, &working_hours).await?;
    tx.commit().await?;

    Ok(true)
}

/// Hard delete; owned working-hour rows cascade
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM branches WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
