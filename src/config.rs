// src/config.rs
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Spreadsheet source identifier. Absence is a supported state: the site
    /// renders from the hardcoded defaults with no network attempt.
    pub sheet_id: Option<String>,
    pub fetch_timeout_secs: u64,
    pub content_ttl_minutes: u64,
    /// Campaign deadline driving the countdown timer.
    pub campaign_end: DateTime<Utc>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            sheet_id: std::env::var("SHEET_ID")
                .ok()
                .filter(|s| !s.is_empty()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            content_ttl_minutes: std::env::var("CONTENT_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            campaign_end: std::env::var("CAMPAIGN_END")
                .unwrap_or_else(|_| "2025-12-02T00:00:00Z".to_string())
                .parse()?,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid server address")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn content_ttl(&self) -> Duration {
        Duration::from_secs(self.content_ttl_minutes * 60)
    }
}
