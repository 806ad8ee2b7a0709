use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::aggregate::user_totals;
use crate::db::{records, users};
use crate::error::{AppError, Result};
use crate::models::{User, UserSummary};
use crate::points::RawQuantity;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search users by name or document substring, or exact id
///
/// A blank query returns an empty list without touching the store.
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<UserSummary>>> {
    let q = params.q.trim();
    if q.is_empty() {
        return Ok(Json(Vec::new()));
    }
    let matches = users::search(&state.pool, q).await?;
    Ok(Json(matches))
}

/// List all users, id ascending
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let all = users::list(&state.pool).await?;
    Ok(Json(all))
}

#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub total_points: i64,
    pub total_kg: f64,
}

/// User detail with derived totals
///
/// Points and kilograms are recomputed from the user's records on every
/// call; nothing is denormalized into the user row.
pub async fn user_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDetailResponse>> {
    let user = users::get(&state.pool, id).await?;

    let lines: Vec<(String, RawQuantity)> = match &user {
        Some(_) => records::list_for_user(&state.pool, id)
            .await?
            .into_iter()
            .map(|(material, quantity)| (material, quantity.into()))
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(assemble_detail(user, &lines)?))
}

/// Build the detail response for a looked-up user; a lookup miss is
/// NotFound, never a zero-valued record.
fn assemble_detail(
    user: Option<User>,
    lines: &[(String, RawQuantity)],
) -> Result<UserDetailResponse> {
    let user = user.ok_or(AppError::UserNotFound)?;
    let totals = user_totals(lines);

    Ok(UserDetailResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        national_id: user.national_id,
        total_points: totals.points,
        total_kg: totals.kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            secret: "s3cret".to_string(),
            phone: None,
            national_id: Some("12345".to_string()),
        }
    }

    #[test]
    fn missing_user_is_not_found() {
        let result = assemble_detail(None, &[]);
        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[test]
    fn detail_totals_come_from_records() {
        let lines = vec![
            ("papel".to_string(), RawQuantity::Text("3".to_string())),
            ("vidrio".to_string(), RawQuantity::Text("bad".to_string())),
        ];
        let detail = assemble_detail(Some(sample_user()), &lines).unwrap();
        assert_eq!(detail.id, 7);
        assert_eq!(detail.total_points, 24);
        assert_eq!(detail.total_kg, 3.0);
    }

    #[test]
    fn detail_with_no_records_is_zero_but_present() {
        let detail = assemble_detail(Some(sample_user()), &[]).unwrap();
        assert_eq!(detail.total_points, 0);
        assert_eq!(detail.total_kg, 0.0);
    }
}
