//! Page retrieval

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use reqwest::Client;
use std::collections::HashMap;
use tracing::debug;

/// Source of page markup
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML for a URL
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher using the configured timeout and user agent
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} ({} bytes)", url, html.len());
        Ok(html)
    }
}

/// In-memory fetcher serving fixed pages, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

#[async_trait::async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fetcher() {
        let fetcher = StaticFetcher::new().with_page("https://example.com/a", "<p>a</p>");

        assert_eq!(fetcher.fetch("https://example.com/a").await.unwrap(), "<p>a</p>");
        assert!(matches!(
            fetcher.fetch("https://example.com/b").await,
            Err(ScrapeError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_http_fetcher_builds_from_default_config() {
        assert!(HttpFetcher::new(&ScraperConfig::default()).is_ok());
    }
}
