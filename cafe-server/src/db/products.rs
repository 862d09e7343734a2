//! Product queries
//!
//! Prices are stored as TEXT decimals; the owned nutrition record is one
//! JSON document column (NULL = absent).

use shared::models::{Nutrition, Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

use super::{RepoResult, decode_decimal, decode_json, encode_json, new_id};

#[derive(sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub discounted_price: Option<String>,
    pub in_stock: bool,
    pub image_url: String,
    pub nutrition: Option<String>,
}

impl ProductRow {
    pub fn into_model(self) -> RepoResult<(Product, Option<Nutrition>)> {
        let price = decode_decimal(&self.price, "products.price")?;
        let discounted_price = self
            .discounted_price
            .as_deref()
            .map(|raw| decode_decimal(raw, "products.discounted_price"))
            .transpose()?;
        let nutrition = decode_json(self.nutrition, "products.nutrition")?;
        Ok((
            Product {
                id: self.id,
                category_id: self.category_id,
                name: self.name,
                description: self.description,
                price,
                discounted_price,
                in_stock: self.in_stock,
                image_url: self.image_url,
            },
            nutrition,
        ))
    }
}

fn rows_into_models(rows: Vec<ProductRow>) -> RepoResult<Vec<Product>> {
    rows.into_iter()
        .map(|row| row.into_model().map(|(product, _)| product))
        .collect()
}

pub async fn list(pool: &SqlitePool, category_id: Option<&str>) -> RepoResult<Vec<Product>> {
    let rows: Vec<ProductRow> = match category_id {
        Some(category_id) => {
            sqlx::query_as("SELECT * FROM products WHERE category_id = ?1 ORDER BY name")
                .bind(category_id)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM products ORDER BY name")
                .fetch_all(pool)
                .await?
        }
    };
    rows_into_models(rows)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    id: &str,
) -> RepoResult<Option<(Product, Option<Nutrition>)>> {
    let row: Option<ProductRow> = sqlx::query_as("SELECT * FROM products WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(ProductRow::into_model).transpose()
}

pub async fn exists(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM products WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn insert(
    pool: &SqlitePool,
    data: &ProductCreate,
    category_id: Option<&str>,
) -> RepoResult<Product> {
    let id = new_id();
    let nutrition = encode_json(&data.nutrition, "products.nutrition")?;
    sqlx::query(
        "INSERT INTO products
         (id, category_id, name, description, price, discounted_price, in_stock, image_url, nutrition)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(&id)
    .bind(category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price.to_string())
    .bind(data.discounted_price.map(|d| d.to_string()))
    .bind(data.in_stock)
    .bind(&data.image_url)
    .bind(&nutrition)
    .execute(pool)
    .await?;

    Ok(Product {
        id,
        category_id: category_id.map(|s| s.to_string()),
        name: data.name.clone(),
        description: data.description.clone(),
        price: data.price,
        discounted_price: data.discounted_price,
        in_stock: data.in_stock,
        image_url: data.image_url.clone(),
    })
}

/// Whole-record replacement; an omitted nutrition clears the stored one.
/// The category link is managed through [`set_category`] only
pub async fn update(pool: &SqlitePool, id: &str, data: &ProductUpdate) -> RepoResult<bool> {
    let nutrition = encode_json(&data.nutrition, "products.nutrition")?;
    let result = sqlx::query(
        "UPDATE products
         SET name = ?1, description = ?2, price = ?3, discounted_price = ?4,
             in_stock = ?5, image_url = ?6, nutrition = ?7
         WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price.to_string())
    .bind(data.discounted_price.map(|d| d.to_string()))
    .bind(data.in_stock)
    .bind(&data.image_url)
    .bind(&nutrition)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Set or clear the optional category reference
pub async fn set_category(
    pool: &SqlitePool,
    product_id: &str,
    category_id: Option<&str>,
) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE products SET category_id = ?1 WHERE id = ?2")
        .bind(category_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
