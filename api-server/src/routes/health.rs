//! Health check and welcome endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const WELCOME_MESSAGE: &str = "Welcome to the tasks API!";

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
