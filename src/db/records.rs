//! Recycling-record store operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{MaterialSubtotal, RecyclingRecord};

/// (material, quantity) lines for one user, in insertion order.
pub async fn list_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<(String, f64)>, sqlx::Error> {
    sqlx::query_as::<_, (String, f64)>(
        r#"
        SELECT material, quantity
        FROM recycling_records
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<RecyclingRecord>, sqlx::Error> {
    sqlx::query_as::<_, RecyclingRecord>(
        r#"
        SELECT id, user_id, material, recorded_at, quantity
        FROM recycling_records
        ORDER BY recorded_at DESC NULLS LAST
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    user_id: i64,
    material: &str,
    recorded_at: DateTime<Utc>,
    quantity: f64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO recycling_records (user_id, material, recorded_at, quantity)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(material)
    .bind(recorded_at)
    .bind(quantity)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Quantity rollup per (user, material), the input to the ranking.
pub async fn sum_by_user_and_material(
    pool: &PgPool,
) -> Result<Vec<MaterialSubtotal>, sqlx::Error> {
    sqlx::query_as::<_, MaterialSubtotal>(
        r#"
        SELECT user_id, material, SUM(quantity) AS total_quantity
        FROM recycling_records
        GROUP BY user_id, material
        ORDER BY MIN(id)
        "#,
    )
    .fetch_all(pool)
    .await
}
