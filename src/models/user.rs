use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row as stored.
///
/// The credential never leaves the server: it is skipped on serialization.
#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub secret: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
}

/// Slim projection returned by the listing and search endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub document: Option<String>,
}
