use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_LOGIN_FIELDS, ERR_REGISTER_FIELDS};
use crate::db::users;
use crate::error::{AppError, Result};
use crate::routes::validation::required;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub secret: Option<String>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Register a new user
///
/// Rejects the registration when the email is already taken. The existence
/// check and the insert are separate statements; the unique index on email
/// is what actually guarantees no duplicate slips through a concurrent
/// registration (such an insert fails and maps to the same 400).
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let (Some(name), Some(email), Some(secret)) = (
        required(payload.name),
        required(payload.email),
        required(payload.secret),
    ) else {
        return Err(AppError::Validation(ERR_REGISTER_FIELDS.to_string()));
    };

    if users::find_by_email(&state.pool, &email).await?.is_some() {
        tracing::info!(%email, "registration rejected, email taken");
        return Err(AppError::DuplicateEmail);
    }

    let user = users::create(
        &state.pool,
        &name,
        &email,
        &secret,
        payload.phone.as_deref(),
        payload.national_id.as_deref(),
    )
    .await
    .map_err(AppError::from_insert_error)?;

    tracing::info!(user_id = user.id, "new user registered");

    Ok(Json(AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub secret: Option<String>,
}

/// Log a user in
///
/// Credentials are compared as plain text against the stored value. That is
/// the contract the existing clients rely on; it is a known security defect
/// of the system, not a pattern to extend.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let (Some(email), Some(secret)) = (required(payload.email), required(payload.secret)) else {
        return Err(AppError::Validation(ERR_LOGIN_FIELDS.to_string()));
    };

    let user = users::find_by_credentials(&state.pool, &email, &secret)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}
