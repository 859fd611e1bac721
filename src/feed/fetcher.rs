// ABOUTME: Headline Fetcher - downloads one feed over HTTP with a fixed timeout
// ABOUTME: and turns its first entries into normalized headlines.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::parser::parse_feed;
use super::types::Headline;
use crate::config::ServerConfig;
use crate::error::FetchError;

/// Fetches up to `limit` headlines from a feed URL.
#[async_trait]
pub trait HeadlineFetcher: Send + Sync {
    /// Fetch and normalize at most `limit` entries in document order.
    ///
    /// Errors are transport failures only; an unparseable document
    /// returns an empty list.
    async fn fetch(&self, url: &str, limit: usize) -> Result<Vec<Headline>, FetchError>;
}

/// Fetcher backed by reqwest.
pub struct HttpHeadlineFetcher {
    client: reqwest::Client,
}

impl HttpHeadlineFetcher {
    /// Build a fetcher using the timeout and user agent from `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.as_str())
            // Each fetch owns its connection for the duration of one request.
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HeadlineFetcher for HttpHeadlineFetcher {
    async fn fetch(&self, url: &str, limit: usize) -> Result<Vec<Headline>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "feed returned non-success status");
        }

        let body = response.text().await?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let feed = parse_feed(body.as_bytes());
        let headlines: Vec<Headline> = feed
            .entries
            .into_iter()
            .take(limit)
            .map(Headline::from_entry)
            .collect();

        debug!(url, limit, count = headlines.len(), "fetched feed");
        Ok(headlines)
    }
}
