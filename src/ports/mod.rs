//! Port traits defining external boundaries.
//!
//! The only boundary is the BMC's HTTP API. Implementations live in
//! `src/adapters/`.

pub mod http;

pub use http::{json_body, json_headers, HttpRequest, HttpTransport, Method, JSON_CONTENT_TYPE};
