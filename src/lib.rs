//! EcoVilla Recycling-Rewards Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod points;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: Config,
}
