//! User store operations.

use sqlx::PgPool;

use crate::constants::SEARCH_RESULT_LIMIT;
use crate::models::{User, UserSummary};

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, secret, phone, national_id
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    secret: &str,
    phone: Option<&str>,
    national_id: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, secret, phone, national_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, secret, phone, national_id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(secret)
    .bind(phone)
    .bind(national_id)
    .fetch_one(pool)
    .await
}

/// Plain-text credential match, kept for parity with existing clients.
pub async fn find_by_credentials(
    pool: &PgPool,
    email: &str,
    secret: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, secret, phone, national_id
        FROM users
        WHERE email = $1 AND secret = $2
        "#,
    )
    .bind(email)
    .bind(secret)
    .fetch_optional(pool)
    .await
}

/// Substring match on name or document, or an exact textual id match.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, name, national_id AS document
        FROM users
        WHERE name ILIKE $1 OR national_id ILIKE $1 OR CAST(id AS TEXT) = $2
        ORDER BY name
        LIMIT $3
        "#,
    )
    .bind(format!("%{query}%"))
    .bind(query)
    .bind(SEARCH_RESULT_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, name, national_id AS document
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, secret, phone, national_id
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Id/name pairs for attaching display names to the ranking.
pub async fn names(pool: &PgPool) -> Result<Vec<(i64, String)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM users")
        .fetch_all(pool)
        .await
}
