//! Recording adapters that capture interactions to the cache.

pub mod http;

pub use http::RecordingHttpTransport;
