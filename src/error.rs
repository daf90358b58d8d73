//! Error type shared by the cache, the transports and the client.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a status code other than 200.
    #[error("HTTP Error {status}: {url}{}", body_suffix(.data))]
    Http {
        /// URL of the failed request.
        url: String,
        /// Status code received.
        status: u16,
        /// Request body, when one was sent.
        data: Option<String>,
    },

    /// Offline mode found no recorded interaction for the URL.
    #[error("no cached interaction for {url} (expected {})", .path.display())]
    CacheMiss {
        /// URL that was requested.
        url: String,
        /// Cache file that was looked up.
        path: PathBuf,
    },

    /// A recorded interaction exists but does not match the request.
    #[error("cached interaction for {url} does not match the request ({field} differs)")]
    CacheMismatch {
        /// URL that was requested.
        url: String,
        /// First field found to differ.
        field: &'static str,
    },

    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// `/org/openbmc/control` is missing on the server.
    #[error("no /org/openbmc/control in {entries}")]
    MissingControlNamespace {
        /// What `/org/openbmc/` listed instead.
        entries: String,
    },

    /// Connection, TLS or protocol failure below HTTP status handling.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Cache file I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn body_suffix(data: &Option<String>) -> String {
    data.as_deref().map(|d| format!(" {d}")).unwrap_or_default()
}

impl Error {
    pub(crate) fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Status code carried by an [`Error::Http`], if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for failures of the offline replay protocol.
    #[must_use]
    pub fn is_cache_failure(&self) -> bool {
        matches!(self, Self::CacheMiss { .. } | Self::CacheMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_body_when_present() {
        let err = Error::Http {
            url: "https://bmc/login".into(),
            status: 401,
            data: Some(r#"{"data": []}"#.into()),
        };
        assert_eq!(err.to_string(), r#"HTTP Error 401: https://bmc/login {"data": []}"#);
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn http_error_display_without_body() {
        let err = Error::Http { url: "https://bmc/x".into(), status: 404, data: None };
        assert_eq!(err.to_string(), "HTTP Error 404: https://bmc/x");
    }

    #[test]
    fn cache_failures_are_distinct_from_http_errors() {
        let miss = Error::CacheMiss { url: "u".into(), path: PathBuf::from("f") };
        let http = Error::Http { url: "u".into(), status: 500, data: None };
        assert!(miss.is_cache_failure());
        assert!(!http.is_cache_failure());
        assert_eq!(miss.status_code(), None);
    }
}
