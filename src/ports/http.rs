//! HTTP port for the OpenBMC REST API.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::cache::CachedResponse;
use crate::error::{Error, Result};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// One outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
    /// Whether TLS certificates are verified.
    pub verify: bool,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// A `GET` carrying the JSON content-type header.
    #[must_use]
    pub fn get(url: impl Into<String>, verify: bool) -> Self {
        Self { method: Method::Get, url: url.into(), body: None, verify, headers: json_headers() }
    }

    /// A `POST` of `body` carrying the JSON content-type header.
    #[must_use]
    pub fn post(url: impl Into<String>, body: impl Into<String>, verify: bool) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body.into()),
            verify,
            headers: json_headers(),
        }
    }
}

/// The fixed `Content-Type: application/json` header map.
#[must_use]
pub fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())])
}

/// Serializes a request body with `", "` and `": "` separators and ASCII-only
/// strings, the layout existing recordings were written with.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn json_body(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| Error::invalid_response(err.to_string()))
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        separator(writer, first)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        separator(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(c.encode_utf8(&mut [0u8; 4]).as_bytes())?;
            } else {
                for unit in c.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

fn separator<W: ?Sized + io::Write>(writer: &mut W, first: bool) -> io::Result<()> {
    if first {
        Ok(())
    } else {
        writer.write_all(b", ")
    }
}

/// Performs HTTP requests and returns their status and JSON body.
///
/// Implementations may talk to a server, record what they see, or serve
/// previously recorded interactions.
pub trait HttpTransport: Send + Sync {
    /// Performs `request` and returns the response.
    ///
    /// A non-200 status is not an error at this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be produced (transport failure,
    /// non-JSON body, missing or mismatched recording).
    fn perform(&self, request: &HttpRequest) -> Result<CachedResponse>;
}
