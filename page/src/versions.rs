//! Reactive version slots consumed by the components.

use leptos::prelude::*;
use volcanoyt_versions::{Service, VersionState};

/// Read side handed to the components: one signal per service.
#[derive(Clone, Copy)]
pub struct LiveVersions {
    pub web_map: Signal<Option<String>>,
    pub android_app: Signal<Option<String>>,
    pub web_portal: Signal<Option<String>>,
    pub api: Signal<Option<String>>,
}

impl LiveVersions {
    pub fn get(&self, service: Service) -> Signal<Option<String>> {
        match service {
            Service::WebMap => self.web_map,
            Service::AndroidApp => self.android_app,
            Service::WebPortal => self.web_portal,
            Service::Api => self.api,
        }
    }

    /// Frozen values for static rendering.
    pub fn snapshot(state: &VersionState) -> Self {
        let fixed = |service: Service| {
            let value = state.get(service).map(str::to_string);
            Signal::derive(move || value.clone())
        };
        Self {
            web_map: fixed(Service::WebMap),
            android_app: fixed(Service::AndroidApp),
            web_portal: fixed(Service::WebPortal),
            api: fixed(Service::Api),
        }
    }
}

/// Write side owned by the browser app; every slot starts unknown.
#[derive(Clone, Copy)]
pub struct VersionSlots {
    web_map: RwSignal<Option<String>>,
    android_app: RwSignal<Option<String>>,
    web_portal: RwSignal<Option<String>>,
    api: RwSignal<Option<String>>,
}

impl Default for VersionSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSlots {
    pub fn new() -> Self {
        Self {
            web_map: RwSignal::new(None),
            android_app: RwSignal::new(None),
            web_portal: RwSignal::new(None),
            api: RwSignal::new(None),
        }
    }

    fn slot(&self, service: Service) -> RwSignal<Option<String>> {
        match service {
            Service::WebMap => self.web_map,
            Service::AndroidApp => self.android_app,
            Service::WebPortal => self.web_portal,
            Service::Api => self.api,
        }
    }

    /// Store `version`; subscribers are only notified when it differs.
    pub fn publish(&self, service: Service, version: &str) -> bool {
        let slot = self.slot(service);
        if slot.with_untracked(|current| current.as_deref() == Some(version)) {
            return false;
        }
        slot.set(Some(version.to_string()));
        true
    }

    pub fn live(&self) -> LiveVersions {
        LiveVersions {
            web_map: self.web_map.into(),
            android_app: self.android_app.into(),
            web_portal: self.web_portal.into(),
            api: self.api.into(),
        }
    }
}
