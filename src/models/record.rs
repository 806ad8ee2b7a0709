use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A recycling submission. Immutable once created; points are derived at
/// read time, never stored on the row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecyclingRecord {
    pub id: i64,
    pub user_id: i64,
    pub material: String,
    #[serde(rename = "date")]
    pub recorded_at: Option<DateTime<Utc>>,
    pub quantity: f64,
}

/// One row of the per (user, material) quantity rollup feeding the ranking.
#[derive(Debug, Clone, FromRow)]
pub struct MaterialSubtotal {
    pub user_id: i64,
    pub material: String,
    pub total_quantity: f64,
}

/// A leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub user_id: i64,
    pub name: String,
    pub points: i64,
}
