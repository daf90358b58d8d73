//! Live adapter for the `HttpTransport` port using `reqwest`.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use tracing::debug;

use crate::cache::CachedResponse;
use crate::error::Result;
use crate::ports::http::{HttpRequest, HttpTransport, Method};

/// Talks to a real BMC over HTTPS.
///
/// Two clients share one cookie jar so that the session cookie set by
/// `/login` is sent regardless of the per-request `verify` flag.
pub struct LiveHttpTransport {
    verifying: Client,
    insecure: Client,
}

impl LiveHttpTransport {
    /// Creates a transport with an empty cookie jar.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let verifying = Client::builder().cookie_provider(Arc::clone(&jar)).build()?;
        let insecure = Client::builder()
            .cookie_provider(jar)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { verifying, insecure })
    }
}

impl HttpTransport for LiveHttpTransport {
    fn perform(&self, request: &HttpRequest) -> Result<CachedResponse> {
        let client = if request.verify { &self.verifying } else { &self.insecure };

        let mut builder = match request.method {
            Method::Get => client.get(&request.url),
            Method::Post => client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;
        debug!(method = %request.method, url = %request.url, status, "live response");

        CachedResponse::from_text(status, &text)
    }
}
