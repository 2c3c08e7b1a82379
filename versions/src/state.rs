//! Last-known-good versions, one slot per service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::service::Service;

/// Per-service display state.
///
/// A slot is filled by the first successful poll and only ever replaced by a
/// later successful poll. Failures never clear it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionState {
    versions: BTreeMap<Service, String>,
}

impl VersionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, service: Service) -> Option<&str> {
        self.versions.get(&service).map(String::as_str)
    }

    /// Store `version` for `service`; returns whether the slot changed.
    pub fn apply(&mut self, service: Service, version: &str) -> bool {
        if self.get(service) == Some(version) {
            return false;
        }
        self.versions.insert(service, version.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Known versions in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Service, &str)> {
        self.versions.iter().map(|(svc, v)| (*svc, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(Service, S)> for VersionState {
    fn from_iter<I: IntoIterator<Item = (Service, S)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().map(|(svc, v)| (svc, v.into())).collect(),
        }
    }
}

/// Where a poll cycle deposits successful versions.
pub trait VersionSink {
    /// Record `version` for `service`; returns whether anything changed.
    fn publish(&self, service: Service, version: &str) -> bool;
}

#[cfg(not(target_arch = "wasm32"))]
pub use shared::SharedVersions;

#[cfg(not(target_arch = "wasm32"))]
mod shared {
    use tokio::sync::watch;

    use super::{VersionSink, VersionState};
    use crate::service::Service;

    /// Watch-channel backed state for native hosts.
    ///
    /// Subscribers wake only when a slot actually changes.
    #[derive(Clone, Debug)]
    pub struct SharedVersions {
        tx: watch::Sender<VersionState>,
    }

    impl SharedVersions {
        pub fn new(initial: VersionState) -> Self {
            let (tx, _rx) = watch::channel(initial);
            Self { tx }
        }

        pub fn snapshot(&self) -> VersionState {
            self.tx.borrow().clone()
        }

        pub fn subscribe(&self) -> watch::Receiver<VersionState> {
            self.tx.subscribe()
        }
    }

    impl Default for SharedVersions {
        fn default() -> Self {
            Self::new(VersionState::default())
        }
    }

    impl VersionSink for SharedVersions {
        fn publish(&self, service: Service, version: &str) -> bool {
            self.tx.send_if_modified(|state| state.apply(service, version))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_only_the_named_service() {
        let mut state = VersionState::new();
        assert!(state.apply(Service::WebMap, "1.4.2"));
        assert_eq!(state.get(Service::WebMap), Some("1.4.2"));
        assert_eq!(state.get(Service::AndroidApp), None);
        assert_eq!(state.get(Service::WebPortal), None);
        assert_eq!(state.get(Service::Api), None);
    }

    #[test]
    fn identical_value_is_not_a_change() {
        let mut state = VersionState::new();
        assert!(state.apply(Service::Api, "3.1.0"));
        assert!(!state.apply(Service::Api, "3.1.0"));
        assert!(state.apply(Service::Api, "3.2.0"));
        assert_eq!(state.get(Service::Api), Some("3.2.0"));
    }

    #[test]
    fn serializes_as_keyed_object() {
        let state: VersionState = [(Service::AndroidApp, "2.0.0"), (Service::WebMap, "1.4.2")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"web-map":"1.4.2","android-app":"2.0.0"}"#);
    }

    #[tokio::test]
    async fn shared_versions_only_notifies_on_change() {
        let shared = SharedVersions::default();
        let mut rx = shared.subscribe();

        assert!(shared.publish(Service::WebMap, "1.4.2"));
        assert!(rx.has_changed().unwrap());
        let _ = rx.borrow_and_update();

        assert!(!shared.publish(Service::WebMap, "1.4.2"));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(shared.snapshot().get(Service::WebMap), Some("1.4.2"));
    }
}
