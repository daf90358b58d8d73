//! Persisted form of a recorded HTTP interaction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::response::CachedResponse;
use crate::error::{Error, Result};
use crate::ports::HttpRequest;

/// One recorded request/response pair, stored as a JSON file.
///
/// The field names are the on-disk format; renaming one orphans every
/// existing recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedInteraction {
    /// Full request URL.
    pub url: String,
    /// Request body, absent for GET requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Whether TLS certificates were verified.
    pub verify: bool,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Response status code.
    pub status_code: u16,
    /// Parsed response body.
    pub json_struct: serde_json::Value,
    /// When this interaction was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl CachedInteraction {
    /// Capture a live request and the response it produced.
    #[must_use]
    pub fn capture(request: &HttpRequest, response: &CachedResponse) -> Self {
        Self {
            url: request.url.clone(),
            data: request.body.clone(),
            verify: request.verify,
            headers: request.headers.clone(),
            status_code: response.status_code(),
            json_struct: response.json().clone(),
            recorded_at: Some(Utc::now()),
        }
    }

    /// Check that this recording answers `request`.
    ///
    /// The stored body is only compared when the request carries one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CacheMismatch`] naming the first field that differs.
    pub fn check_matches(&self, request: &HttpRequest) -> Result<()> {
        let mismatch = |field| Error::CacheMismatch { url: request.url.clone(), field };

        if let Some(body) = &request.body {
            if self.data.as_ref() != Some(body) {
                return Err(mismatch("data"));
            }
        }
        if self.url != request.url {
            return Err(mismatch("url"));
        }
        if self.verify != request.verify {
            return Err(mismatch("verify"));
        }
        if self.headers != request.headers {
            return Err(mismatch("headers"));
        }
        Ok(())
    }

    /// Rebuild the response this interaction recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored body is not a JSON object.
    pub fn to_response(&self) -> Result<CachedResponse> {
        CachedResponse::new(self.status_code, self.json_struct.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_request(body: &str) -> HttpRequest {
        HttpRequest::post("https://bmc/login", body.to_string(), false)
    }

    fn recorded(body: &str) -> CachedInteraction {
        let request = login_request(body);
        let body = json!({"status": "ok", "data": "User 'root' logged in"});
        let response = CachedResponse::new(200, body).unwrap();
        CachedInteraction::capture(&request, &response)
    }

    #[test]
    fn file_format_field_names() {
        let mut interaction = recorded(r#"{"data": ["root", "0penBmc"]}"#);
        interaction.recorded_at = None;
        let value = serde_json::to_value(&interaction).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://bmc/login",
                "data": r#"{"data": ["root", "0penBmc"]}"#,
                "verify": false,
                "headers": {"Content-Type": "application/json"},
                "status_code": 200,
                "json_struct": {"status": "ok", "data": "User 'root' logged in"},
            })
        );
    }

    #[test]
    fn reads_files_without_data_or_timestamp() {
        let raw = r#"{"url": "https://bmc/org/openbmc/control/flash/bios",
                      "verify": false,
                      "headers": {"Content-Type": "application/json"},
                      "status_code": 200,
                      "json_struct": {"data": {"version": "1.0"}}}"#;
        let interaction: CachedInteraction = serde_json::from_str(raw).unwrap();
        assert!(interaction.data.is_none());
        assert!(interaction.recorded_at.is_none());
        let request = HttpRequest::get("https://bmc/org/openbmc/control/flash/bios", false);
        assert!(interaction.check_matches(&request).is_ok());
    }

    #[test]
    fn body_mismatch_is_rejected() {
        let interaction = recorded(r#"{"data": ["root", "0penBmc"]}"#);
        let err = interaction.check_matches(&login_request(r#"{"data": ["root", "wrong"]}"#));
        assert!(matches!(err, Err(Error::CacheMismatch { field: "data", .. })));
    }

    #[test]
    fn verify_and_header_mismatch_are_rejected() {
        let body = r#"{"data": ["root", "0penBmc"]}"#;
        let interaction = recorded(body);

        let mut verified = login_request(body);
        verified.verify = true;
        assert!(matches!(
            interaction.check_matches(&verified),
            Err(Error::CacheMismatch { field: "verify", .. })
        ));

        let mut extra_header = login_request(body);
        extra_header.headers.insert("Accept".into(), "*/*".into());
        assert!(matches!(
            interaction.check_matches(&extra_header),
            Err(Error::CacheMismatch { field: "headers", .. })
        ));
    }

    #[test]
    fn get_without_body_ignores_stored_data() {
        let interaction = recorded(r#"{"data": []}"#);
        let request = HttpRequest::get("https://bmc/login", false);
        assert!(interaction.check_matches(&request).is_ok());
    }
}
