//! The externally hosted products whose versions the landing page shows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One tracked product.
///
/// The kebab-case key (`web-map`, `android-app`, ...) is the stable name used
/// in config files, JSON output and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// Browser map at map.volcanoyt.com
    WebMap,
    /// Android APK distributed from the file mirror
    AndroidApp,
    /// Main web portal
    WebPortal,
    /// Public API
    Api,
}

impl Service {
    /// Every tracked service, in display order.
    pub const ALL: [Service; 4] = [
        Service::WebMap,
        Service::AndroidApp,
        Service::WebPortal,
        Service::Api,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Service::WebMap => "web-map",
            Service::AndroidApp => "android-app",
            Service::WebPortal => "web-portal",
            Service::Api => "api",
        }
    }

    /// Human label used on call-to-action buttons and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Service::WebMap => "Web Maps",
            Service::AndroidApp => "Android App",
            Service::WebPortal => "Web Portal",
            Service::Api => "API",
        }
    }

    /// JSON field holding the version string in this service's metadata.
    pub fn version_field(self) -> &'static str {
        match self {
            Service::AndroidApp => "versionName",
            _ => "version",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognised service key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service '{0}' (expected one of: web-map, android-app, web-portal, api)")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.key() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for svc in Service::ALL {
            assert_eq!(svc.key().parse::<Service>(), Ok(svc));
        }
        assert!("desktop".parse::<Service>().is_err());
    }

    #[test]
    fn android_reads_version_name() {
        assert_eq!(Service::AndroidApp.version_field(), "versionName");
        assert_eq!(Service::WebMap.version_field(), "version");
        assert_eq!(Service::WebPortal.version_field(), "version");
        assert_eq!(Service::Api.version_field(), "version");
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&Service::AndroidApp).unwrap();
        assert_eq!(json, "\"android-app\"");
    }
}
