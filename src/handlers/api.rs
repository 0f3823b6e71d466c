// src/handlers/api.rs
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::content::fetch::ProbeReport;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContentStatusResponse {
    pub configured: bool,
    #[serde(flatten)]
    pub probe: Option<ProbeReport>,
}

/// Diagnostic view of the sheet source: which transport answers, how many
/// rows it holds, or why the fetch degrades. Failures are reported in the
/// body, never as an error status, mirroring the fetcher's own contract.
pub async fn content_status(State(state): State<Arc<AppState>>) -> Json<ContentStatusResponse> {
    let response = match state.content.sheet_id() {
        None => ContentStatusResponse {
            configured: false,
            probe: None,
        },
        Some(id) => ContentStatusResponse {
            configured: true,
            probe: Some(state.content.fetcher().probe(id).await),
        },
    };
    Json(response)
}
