// src/routes.rs
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::handlers::{api, web};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // WEB UI ROUTES
        // ==================
        .route("/", get(web::index))
        .route("/accessibility", get(web::accessibility))
        // ==================
        // API ROUTES
        // ==================
        .route("/api/health", get(health_check))
        .route("/api/content/status", get(api::content_status))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sheet_configured: state.content.sheet_id().is_some(),
        campaign_end: state.config.campaign_end.to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub sheet_configured: bool,
    pub campaign_end: String,
}
