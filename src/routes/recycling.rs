use std::collections::HashMap;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::aggregate::build_ranking;
use crate::constants::ERR_RECORD_FIELDS;
use crate::db::{records, users};
use crate::error::{AppError, Result};
use crate::models::{RankingEntry, RecyclingRecord};
use crate::points::{compute_points, RawQuantity};
use crate::routes::validation::required;
use crate::AppState;

/// List all recycling records, newest first
pub async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<RecyclingRecord>>> {
    let all = records::list_all(&state.pool).await?;
    Ok(Json(all))
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub user_id: Option<i64>,
    pub material: Option<String>,
    pub quantity: Option<RawQuantity>,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub id: i64,
    pub points: i64,
}

/// Log a recycling submission
///
/// The record is stamped with server time and stored with the parsed
/// quantity; an unparsable quantity stores as 0 kg rather than failing.
/// The points in the response are derived the same way every later read
/// derives them.
pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<Json<CreateRecordResponse>> {
    let (Some(user_id), Some(material), Some(quantity)) = (
        payload.user_id,
        required(payload.material),
        payload.quantity,
    ) else {
        return Err(AppError::Validation(ERR_RECORD_FIELDS.to_string()));
    };

    let recorded_at = Utc::now();
    let kg = quantity.as_kg().unwrap_or(0.0);
    let id = records::create(&state.pool, user_id, &material, recorded_at, kg).await?;

    let points = compute_points(Some(material.as_str()), &quantity);
    tracing::info!(record_id = id, user_id, %material, kg, points, "recycling record stored");

    Ok(Json(CreateRecordResponse { id, points }))
}

/// Leaderboard: per-user points over all records, descending
pub async fn ranking(State(state): State<AppState>) -> Result<Json<Vec<RankingEntry>>> {
    let subtotals = records::sum_by_user_and_material(&state.pool).await?;
    let names: HashMap<i64, String> = users::names(&state.pool).await?.into_iter().collect();
    Ok(Json(build_ranking(&subtotals, &names)))
}
