pub mod http_client;

use crate::config::ClientConfig;
use crate::error::{Result, ScrapeError};
use crate::models::{ScrapeRequest, ScrapeResponse};
use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use self::http_client::HttpClient;

pub const SCRAPE_PATH: &str = "/scrape";

// ── API trait ─────────────────────────────────────────────────────────────────

/// Swappable scraping backend.
#[async_trait]
pub trait ScrapeApi: Send + Sync {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse>;
}

// ── ScrapeNinja client ────────────────────────────────────────────────────────

/// Client for ScrapeNinja behind RapidAPI.
///
/// Holds no per-call state, so one instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct ScrapeNinjaClient {
    http: HttpClient,
}

impl ScrapeNinjaClient {
    /// Client with the default endpoint and a 30s timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(api_key, config)?,
        })
    }

    /// Build from `SCRAPENINJA_API_KEY` (or `RAPIDAPI_KEY`) and [`ClientConfig::load`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = api_key_from(|name| std::env::var(name).ok())?;
        let config = ClientConfig::load()?;

        Self::with_config(api_key, config).context("Failed to build ScrapeNinja client")
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }
}

/// `SCRAPENINJA_API_KEY`, falling back to `RAPIDAPI_KEY`. Empty values count as unset.
fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    ["SCRAPENINJA_API_KEY", "RAPIDAPI_KEY"]
        .into_iter()
        .filter_map(&lookup)
        .find(|key| !key.is_empty())
        .ok_or_else(|| anyhow!("SCRAPENINJA_API_KEY not set"))
}

#[async_trait]
impl ScrapeApi for ScrapeNinjaClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse> {
        let payload = request.to_json()?;
        let outbound = self.http.new_request(Method::POST, SCRAPE_PATH, Some(payload))?;

        debug!("POST {}", outbound.url());
        let response = self.http.execute(outbound).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error body ({}): {}", status, e);
                String::new()
            });
            debug!("Provider replied {}", status);
            return Err(ScrapeError::Provider { status, body });
        }

        let bytes = response.bytes().await.map_err(ScrapeError::Transport)?;
        ScrapeResponse::from_slice(&bytes)
    }
}
