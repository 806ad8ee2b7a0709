pub mod auth;
pub mod recycling;
pub mod status;
pub mod users;
pub mod validation;

pub use auth::{login, register};
pub use recycling::{create_record, list_records, ranking};
pub use status::status;
pub use users::{list_users, search_users, user_detail};

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Assemble the full API router. Shared by the binary and the HTTP tests.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/buscar_usuario", get(search_users))
        .route("/usuarios", get(list_users))
        .route("/usuario/:id", get(user_detail))
        .route("/reciclaje", get(list_records).post(create_record))
        .route("/ranking", get(ranking))
}
