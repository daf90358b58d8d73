//! Replaying adapter for the `HttpTransport` port.

use tracing::debug;

use crate::cache::{CacheStore, CachedResponse};
use crate::error::Result;
use crate::ports::http::{HttpRequest, HttpTransport};

/// Serves recorded responses from a [`CacheStore`] without any network I/O.
pub struct ReplayingHttpTransport {
    store: CacheStore,
}

impl ReplayingHttpTransport {
    /// Creates a replaying transport reading from `store`.
    #[must_use]
    pub fn new(store: CacheStore) -> Self {
        Self { store }
    }
}

impl HttpTransport for ReplayingHttpTransport {
    fn perform(&self, request: &HttpRequest) -> Result<CachedResponse> {
        let interaction = self.store.load(&request.url)?;
        interaction.check_matches(request)?;
        debug!(
            method = %request.method,
            url = %request.url,
            status = interaction.status_code,
            "replayed response"
        );
        interaction.to_response()
    }
}
