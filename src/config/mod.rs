use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration for the ScrapeNinja endpoint on RapidAPI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Value sent as `X-RapidAPI-Host`.
    #[serde(default = "default_rapidapi_host")]
    pub rapidapi_host: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://scrapeninja.p.rapidapi.com".to_string()
}
fn default_content_type() -> String {
    "application/json".to_string()
}
fn default_rapidapi_host() -> String {
    "scrapeninja.p.rapidapi.com".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            content_type: default_content_type(),
            rapidapi_host: default_rapidapi_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Load configuration from file + environment overrides
    ///
    /// Sources are layered: `config/scrapeninja.toml`, `config/local.toml`,
    /// then `SCRAPENINJA_*` environment variables. Missing files are skipped.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_sources(
            [
                config::File::with_name("config/scrapeninja")
                    .required(false)
                    .format(config::FileFormat::Toml),
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            ],
            config::Environment::with_prefix("SCRAPENINJA").try_parsing(true),
        )
    }

    /// Layer `files` in order, then `env` on top.
    fn from_sources<S>(
        files: impl IntoIterator<Item = S>,
        env: config::Environment,
    ) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let cfg = files
            .into_iter()
            .fold(config::Config::builder(), |builder, file| builder.add_source(file))
            .add_source(env)
            .build()
            .context("Failed to assemble client configuration")?;

        cfg.try_deserialize().context("Invalid client configuration")
    }

    /// Request timeout applied to every call made by the transport.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
