//! Recording adapter for the `HttpTransport` port.

use crate::cache::{CacheStore, CachedInteraction, CachedResponse};
use crate::error::Result;
use crate::ports::http::{HttpRequest, HttpTransport};

/// Records every interaction to a [`CacheStore`] while delegating to an
/// inner transport.
pub struct RecordingHttpTransport {
    inner: Box<dyn HttpTransport>,
    store: CacheStore,
}

impl RecordingHttpTransport {
    /// Creates a recording transport wrapping `inner`.
    pub fn new(inner: Box<dyn HttpTransport>, store: CacheStore) -> Self {
        Self { inner, store }
    }
}

impl HttpTransport for RecordingHttpTransport {
    fn perform(&self, request: &HttpRequest) -> Result<CachedResponse> {
        let response = self.inner.perform(request)?;
        self.store.save(&CachedInteraction::capture(request, &response))?;
        Ok(response)
    }
}
