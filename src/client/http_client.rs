use crate::config::ClientConfig;
use crate::error::{Result, ScrapeError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Request};
use std::time::Duration;
use url::Url;

pub const RAPIDAPI_HOST_HEADER: &str = "X-RapidAPI-Host";
pub const RAPIDAPI_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Authenticated transport for the RapidAPI gateway.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    api_key: String,
}

impl HttpClient {
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(ScrapeError::Build)?;

        Ok(Self {
            inner,
            config,
            api_key: api_key.into(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Compose a request to `path` on the base url with the auth headers set.
    ///
    /// `path` replaces whatever path the base url carries.
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let mut url = Url::parse(&self.config.base_url).map_err(|source| {
            ScrapeError::InvalidBaseUrl {
                url: self.config.base_url.clone(),
                source,
            }
        })?;
        url.set_path(path);

        let mut builder = self
            .inner
            .request(method, url)
            .header(CONTENT_TYPE, &self.config.content_type)
            .header(RAPIDAPI_HOST_HEADER, &self.config.rapidapi_host)
            .header(RAPIDAPI_KEY_HEADER, &self.api_key);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder.build().map_err(ScrapeError::Build)
    }

    pub async fn execute(&self, request: Request) -> Result<reqwest::Response> {
        self.inner
            .execute(request)
            .await
            .map_err(ScrapeError::Transport)
    }
}
