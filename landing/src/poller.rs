//! Browser side of the version poller.
//!
//! One cycle runs immediately, then one per interval on a `setInterval`
//! timer. The timer belongs to the reactive owner that started it and is
//! cleared when that owner is cleaned up.

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use volcanoyt_page::VersionSlots;
use volcanoyt_versions::{Endpoint, HttpSource, PollSettings, Service, VersionSink, poll_cycle};
use wasm_bindgen::JsValue;

/// Publishes into the page's signals while the page is mounted.
///
/// Cycles still in flight at unmount resolve into a no-op instead of
/// touching disposed signals.
#[derive(Clone)]
struct PageSink {
    slots: VersionSlots,
    mounted: Arc<AtomicBool>,
}

impl VersionSink for PageSink {
    fn publish(&self, service: Service, version: &str) -> bool {
        if !self.mounted.load(Ordering::Relaxed) {
            return false;
        }
        self.slots.publish(service, version)
    }
}

/// Start polling into `slots`; stops when the calling owner is cleaned up.
pub fn start_version_poller(slots: VersionSlots, settings: PollSettings) {
    let source = match HttpSource::new(settings.request_timeout) {
        Ok(source) => Rc::new(source),
        Err(e) => {
            warn(&format!("version poller disabled: {e}"));
            return;
        }
    };
    let endpoints: Rc<[Endpoint]> = settings.endpoints.into();
    let sink = PageSink {
        slots,
        mounted: unmount_flag(),
    };

    let run_cycle = move || {
        let source = Rc::clone(&source);
        let endpoints = Rc::clone(&endpoints);
        let sink = sink.clone();
        spawn_local(async move {
            let report = poll_cycle(&*source, &endpoints, &sink).await;
            for (service, error) in report.failures() {
                warn(&format!(
                    "{} version unavailable ({:?}): {error}",
                    service.label(),
                    error.kind()
                ));
            }
        });
    };

    run_cycle();

    match set_interval_with_handle(run_cycle, settings.interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => warn(&format!("version poller timer failed: {e:?}")),
    }
}

/// `true` until the current reactive owner is cleaned up.
fn unmount_flag() -> Arc<AtomicBool> {
    let mounted = Arc::new(AtomicBool::new(true));
    let on_unmount = Arc::clone(&mounted);
    on_cleanup(move || on_unmount.store(false, Ordering::Relaxed));
    mounted
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
