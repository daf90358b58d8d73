//! Immutable response value shared by live and replayed calls.

use serde_json::Value;

use crate::error::{Error, Result};

/// Status code and parsed JSON body of one HTTP response.
///
/// Only these two values are kept; headers and raw bytes of the live
/// response are dropped so that replayed and live responses look the same.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    status_code: u16,
    json: Value,
}

impl CachedResponse {
    /// Build a response from a status code and a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] unless `json` is a JSON object.
    pub fn new(status_code: u16, json: Value) -> Result<Self> {
        if !json.is_object() {
            return Err(Error::invalid_response(format!(
                "expected a JSON object body with status {status_code}, got {json}"
            )));
        }
        Ok(Self { status_code, json })
    }

    /// Build a response from a status code and the raw response text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON object.
    pub fn from_text(status_code: u16, text: &str) -> Result<Self> {
        let json = serde_json::from_str(text).map_err(|e| {
            Error::invalid_response(format!("response with status {status_code} is not JSON: {e}"))
        })?;
        Self::new(status_code, json)
    }

    /// HTTP status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Parsed JSON body.
    #[must_use]
    pub fn json(&self) -> &Value {
        &self.json
    }

    /// The `data` member of the OpenBMC response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] if the body has no `data` member.
    pub fn into_data(self) -> Result<Value> {
        let mut json = self.json;
        json.get_mut("data")
            .map(Value::take)
            .ok_or_else(|| Error::invalid_response("response body has no \"data\" member"))
    }
}
