//! Version metadata endpoints and cache-busting URL construction.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::VersionError;
use crate::service::Service;

pub const WEB_MAP_VERSION_URL: &str = "https://map.volcanoyt.com/version.json";
pub const ANDROID_VERSION_URL: &str =
    "https://file2.yuuki.me/p/Local_EU/App/Android/VolcanoYT/version.json";
pub const WEB_PORTAL_VERSION_URL: &str = "https://volcanoyt.com/version.json";
pub const API_VERSION_URL: &str = "https://api.volcanoyt.com/version.json";

/// How a request defeats intermediary caches.
///
/// The token changes on every request; only the query parameter name is
/// configurable because some mirrors (the Android file host) only honour
/// their own parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CacheBust {
    /// Milliseconds since the Unix epoch.
    Timestamp { param: String },
    /// Random token.
    Random { param: String },
}

impl CacheBust {
    pub fn timestamp(param: impl Into<String>) -> Self {
        CacheBust::Timestamp {
            param: param.into(),
        }
    }

    pub fn random(param: impl Into<String>) -> Self {
        CacheBust::Random {
            param: param.into(),
        }
    }

    pub fn param(&self) -> &str {
        match self {
            CacheBust::Timestamp { param } | CacheBust::Random { param } => param,
        }
    }

    /// Fresh token for one request.
    pub fn token(&self) -> String {
        match self {
            CacheBust::Timestamp { .. } => nonce::epoch_millis().to_string(),
            CacheBust::Random { .. } => nonce::random_token(),
        }
    }
}

/// Where and how to read one service's version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub service: Service,
    pub url: String,
    /// JSON field holding the version.
    pub field: String,
    pub cache_bust: CacheBust,
}

impl Endpoint {
    pub fn new(
        service: Service,
        url: impl Into<String>,
        field: impl Into<String>,
        cache_bust: CacheBust,
    ) -> Self {
        Self {
            service,
            url: url.into(),
            field: field.into(),
            cache_bust,
        }
    }

    /// Production endpoint for `service`.
    pub fn volcanoyt(service: Service) -> Self {
        match service {
            Service::WebMap => Self::new(
                service,
                WEB_MAP_VERSION_URL,
                service.version_field(),
                CacheBust::timestamp("t"),
            ),
            // The file mirror ignores unknown params when caching; alist_ts is its own.
            Service::AndroidApp => Self::new(
                service,
                ANDROID_VERSION_URL,
                service.version_field(),
                CacheBust::random("alist_ts"),
            ),
            Service::WebPortal => Self::new(
                service,
                WEB_PORTAL_VERSION_URL,
                service.version_field(),
                CacheBust::timestamp("t"),
            ),
            Service::Api => Self::new(
                service,
                API_VERSION_URL,
                service.version_field(),
                CacheBust::timestamp("t"),
            ),
        }
    }

    /// Request URL with a fresh cache-busting token appended.
    pub fn request_url(&self) -> Result<Url, VersionError> {
        self.request_url_with(&self.cache_bust.token())
    }

    /// Request URL with an explicit token. Existing query pairs are kept.
    pub fn request_url_with(&self, token: &str) -> Result<Url, VersionError> {
        let mut url = Url::parse(&self.url).map_err(|e| VersionError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair(self.cache_bust.param(), token);
        Ok(url)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod nonce {
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn epoch_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }

    pub fn random_token() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

// `SystemTime::now` panics on wasm32-unknown-unknown; ask the JS host instead.
#[cfg(target_arch = "wasm32")]
mod nonce {
    pub fn epoch_millis() -> u128 {
        js_sys::Date::now() as u128
    }

    pub fn random_token() -> String {
        js_sys::Math::random().to_string()
    }
}
