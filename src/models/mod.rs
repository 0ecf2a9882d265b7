use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

// ── Scrape request ────────────────────────────────────────────────────────────

/// What the provider should fetch on our behalf.
///
/// Headers are one value per name. Empty `body` and `geo` mean "not set" and
/// are left out of the encoded request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    /// Proxy location, e.g. `us` or `eu`.
    pub geo: String,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "GET".to_string(),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets a header, replacing any previous value for the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = geo.into();
        self
    }

    /// Headers as `"Name: Value"` lines, sorted by name.
    pub fn header_lines(&self) -> Vec<String> {
        let mut names: Vec<&String> = self.headers.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| format!("{}: {}", name, self.headers[name]))
            .collect()
    }

    /// Encode into the JSON body posted to `/scrape`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(ScrapeError::Encode)
    }
}

/// Wire shape of a request. Field order is the order keys are written.
#[derive(Serialize)]
struct WireRequest<'a> {
    url: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    body: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    geo: &'a str,
    headers: Vec<String>,
}

impl Serialize for ScrapeRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        WireRequest {
            url: &self.url,
            method: &self.method,
            body: &self.body,
            geo: &self.geo,
            headers: self.header_lines(),
        }
        .serialize(serializer)
    }
}

// ── Scrape response ───────────────────────────────────────────────────────────

/// Decoded reply envelope. `body` is the scraped payload exactly as sent.
///
/// Missing and `null` fields both decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub info: ResponseInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

/// Status of the target site's reply, as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
}

impl ScrapeResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(ScrapeError::Decode)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
