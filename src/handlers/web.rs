// src/handlers/web.rs
use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::templates;
use crate::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let content = state.content.get().await;
    Html(templates::home::render(&content, &state.config.campaign_end))
}

pub async fn accessibility() -> Html<String> {
    Html(templates::accessibility::render())
}
