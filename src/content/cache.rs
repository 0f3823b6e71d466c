// src/content/cache.rs
use super::{ContentFetcher, ContentMap};
use crate::config::Config;
use moka::future::Cache;
use std::sync::Arc;

const CONTENT_KEY: &str = "page-content";

/// Page-layer content cache. The fetcher itself never caches; this service
/// holds the assembled map with a TTL so copy edits in the sheet show up
/// within the revalidation window without a fetch per render.
#[derive(Clone)]
pub struct ContentService {
    fetcher: Arc<ContentFetcher>,
    sheet_id: Option<String>,
    cache: Cache<&'static str, Arc<ContentMap>>,
}

impl ContentService {
    pub fn new(config: &Config) -> Self {
        Self {
            fetcher: Arc::new(ContentFetcher::new(config.fetch_timeout())),
            sheet_id: config.sheet_id.clone(),
            cache: Cache::builder()
                .max_capacity(1)
                .time_to_live(config.content_ttl())
                .build(),
        }
    }

    pub fn sheet_id(&self) -> Option<&str> {
        self.sheet_id.as_deref()
    }

    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    /// Content for a render: cached copy if fresh, otherwise a new fetch.
    /// Never fails; worst case this is the default copy.
    pub async fn get(&self) -> Arc<ContentMap> {
        if let Some(content) = self.cache.get(CONTENT_KEY).await {
            return content;
        }
        self.refresh().await
    }

    /// Force a fetch and replace the cached copy. Used at startup and by the
    /// periodic revalidation task.
    pub async fn refresh(&self) -> Arc<ContentMap> {
        let content = Arc::new(self.fetcher.fetch(self.sheet_id.as_deref()).await);
        self.cache.insert(CONTENT_KEY, content.clone()).await;
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_content;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            sheet_id: None,
            fetch_timeout_secs: 1,
            content_ttl_minutes: 30,
            campaign_end: "2025-12-02T00:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn unconfigured_service_serves_defaults() {
        let service = ContentService::new(&test_config());
        let content = service.get().await;
        assert_eq!(*content, default_content());
    }

    #[tokio::test]
    async fn repeated_gets_hit_the_cache() {
        let service = ContentService::new(&test_config());
        let first = service.get().await;
        let second = service.get().await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn refresh_replaces_the_cached_copy() {
        let service = ContentService::new(&test_config());
        let first = service.get().await;
        let refreshed = service.refresh().await;
        assert!(!Arc::ptr_eq(&first, &refreshed));
        assert!(Arc::ptr_eq(&refreshed, &service.get().await));
    }
}
