//! Transport seam for version lookups.
//!
//! The poll cycle only needs "GET this URL and hand me the body of a 2xx
//! response". [`HttpSource`] does that with reqwest, which runs on tokio
//! natively and on `fetch()` in the browser. Tests plug in canned sources.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::VersionError;

/// Fetches the raw body of a version document.
///
/// Implementations must map non-2xx answers to [`VersionError::Status`] and
/// every I/O problem to [`VersionError::Transport`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait VersionSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, VersionError>;
}

/// reqwest-backed source.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client with a per-request timeout.
    ///
    /// The browser `fetch()` backend has no timeout knob, so `timeout` only
    /// applies natively.
    pub fn new(timeout: Duration) -> Result<Self, VersionError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(timeout)
            .user_agent(concat!("volcanoyt-versions/", env!("CARGO_PKG_VERSION")));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| VersionError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl VersionSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, VersionError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| VersionError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "version endpoint answered");
        if !status.is_success() {
            return Err(VersionError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| VersionError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
