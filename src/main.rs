// src/main.rs
mod config;
mod content;
mod handlers;
mod middleware;
mod routes;
mod templates;

use crate::config::Config;
use crate::content::ContentService;
use crate::routes::create_router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub config: Config,
    pub content: ContentService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("hundred=info,tower_http=warn")
                }),
        )
        .with_target(true)
        .with_level(true)
        .init();

    tracing::info!("Starting One of the Hundred campaign server...");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if config.sheet_id.is_some() {
        tracing::info!("Sheet source configured, live copy edits enabled");
    } else {
        tracing::warn!("SHEET_ID not set, serving hardcoded default copy");
    }

    let content = ContentService::new(&config);

    // Warm the cache so the first render never waits on the sheet
    content.refresh().await;

    // Periodic revalidation keeps the cache warm and picks up sheet edits
    let refresher = content.clone();
    let ttl = config.content_ttl();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ttl);
        interval.tick().await; // immediate first tick; cache is already warm
        loop {
            interval.tick().await;
            refresher.refresh().await;
            tracing::debug!("content cache revalidated");
        }
    });

    let state = Arc::new(AppState {
        config: config.clone(),
        content,
    });

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_addr();
    tracing::info!("Campaign server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
