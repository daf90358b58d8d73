//! Replaying adapters that serve recorded interactions.

pub mod http;

pub use http::ReplayingHttpTransport;
