//! Cached session: the `get`/`post` primitives used by the client.

use tracing::debug;

use crate::adapters::live::LiveHttpTransport;
use crate::adapters::recording::RecordingHttpTransport;
use crate::adapters::replaying::ReplayingHttpTransport;
use crate::cache::{CacheStore, CachedResponse};
use crate::error::Result;
use crate::ports::http::{HttpRequest, HttpTransport};

/// A request session that is either online (live, recorded) or offline
/// (replayed from the cache).
///
/// Both modes return the same [`CachedResponse`] shape, so callers cannot
/// tell them apart.
pub struct CachedSession {
    transport: Box<dyn HttpTransport>,
    online: bool,
}

impl CachedSession {
    /// Creates a session for the given mode with its cache in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the live HTTP client cannot be built.
    pub fn new(online: bool, store: CacheStore) -> Result<Self> {
        if online {
            Self::online(store)
        } else {
            Ok(Self::offline(store))
        }
    }

    /// Creates a live session that records every interaction to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the live HTTP client cannot be built.
    pub fn online(store: CacheStore) -> Result<Self> {
        let live = LiveHttpTransport::new()?;
        let recording = RecordingHttpTransport::new(Box::new(live), store);
        Ok(Self { transport: Box::new(recording), online: true })
    }

    /// Creates a session that only replays interactions from `store`.
    #[must_use]
    pub fn offline(store: CacheStore) -> Self {
        Self { transport: Box::new(ReplayingHttpTransport::new(store)), online: false }
    }

    /// Creates a session over an arbitrary transport.
    ///
    /// `online` is reported by [`CachedSession::is_online`] only.
    #[must_use]
    pub fn with_transport(transport: Box<dyn HttpTransport>, online: bool) -> Self {
        Self { transport, online }
    }

    /// Whether requests reach a live server.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Performs a `GET` with the JSON content-type header.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot produce a response.
    pub fn get(&self, url: &str, verify: bool) -> Result<CachedResponse> {
        self.perform(&HttpRequest::get(url, verify))
    }

    /// Performs a `POST` of `data` with the JSON content-type header.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot produce a response.
    pub fn post(&self, url: &str, data: &str, verify: bool) -> Result<CachedResponse> {
        self.perform(&HttpRequest::post(url, data, verify))
    }

    /// Performs an arbitrary request.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot produce a response.
    pub fn perform(&self, request: &HttpRequest) -> Result<CachedResponse> {
        debug!(
            method = %request.method,
            url = %request.url,
            verify = request.verify,
            online = self.online,
            "session request"
        );
        let response = self.transport.perform(request)?;
        debug!(status = response.status_code(), "session response");
        Ok(response)
    }
}
