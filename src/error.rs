use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Every way a scrape call can fail. There is never a partial result.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request could not be serialized.
    #[error("failed to encode scrape request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client or request could not be constructed.
    #[error("failed to build http request: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-200 reply. Displays as the provider's raw body, untouched.
    #[error("{body}")]
    Provider { status: StatusCode, body: String },

    /// A 200 reply whose body is not the expected envelope.
    #[error("failed to decode scrape response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ScrapeError {
    /// Only network-level failures are worth retrying. Retrying is left to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScrapeError::Transport(_))
    }

    /// True for misconfiguration: bad base url or unbuildable request.
    pub fn is_config(&self) -> bool {
        matches!(self, ScrapeError::InvalidBaseUrl { .. } | ScrapeError::Build(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ScrapeError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_raw_body() {
        let err = ScrapeError::Provider {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"message":"quota exceeded"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"{"message":"quota exceeded"}"#);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_retryable());
        assert!(!err.is_config());
    }

    #[test]
    fn test_classification() {
        let bad_url = url::Url::parse("not a url").unwrap_err();
        let err = ScrapeError::InvalidBaseUrl {
            url: "not a url".into(),
            source: bad_url,
        };
        assert!(err.is_config());
        assert!(!err.is_retryable());
        assert_eq!(err.status(), None);

        let decode = serde_json::from_str::<u8>("{").unwrap_err();
        let err = ScrapeError::Decode(decode);
        assert!(!err.is_retryable());
        assert!(!err.is_config());
    }
}
