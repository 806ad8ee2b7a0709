use axum::Json;
use serde_json::{json, Value};

/// Liveness endpoint
///
/// Used by load balancers and monitoring systems.
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
