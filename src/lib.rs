//! Typed client for the ScrapeNinja web-scraping API on RapidAPI.
//!
//! ## Flow
//!
//!   1. Build a [`ScrapeRequest`] (target url, method, headers, body, geo)
//!   2. [`ScrapeApi::scrape`] on [`ScrapeNinjaClient`] posts it to `{base_url}/scrape` with the
//!      RapidAPI auth headers
//!   3. A 200 reply decodes into a [`ScrapeResponse`]; anything else comes back
//!      as [`ScrapeError::Provider`] carrying the raw body
//!
//! No retries happen here. [`ScrapeError::is_retryable`] tells the caller which
//! failures are worth another attempt.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ScrapeApi, ScrapeNinjaClient};
pub use config::ClientConfig;
pub use error::{Result, ScrapeError};
pub use models::{ResponseInfo, ScrapeRequest, ScrapeResponse};
