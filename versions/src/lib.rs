//! # volcanoyt-versions
//!
//! Best-effort discovery of the current version of every VolcanoYT product
//! (web map, Android app, web portal, API).
//!
//! A poll cycle fetches each product's `version.json` concurrently, with a
//! cache-busting query parameter, and publishes whatever parses into a
//! [`VersionSink`]. A failing product is logged and keeps its last known
//! version; nothing is retried before the next cycle.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use volcanoyt_versions::{HttpSource, PollSettings, Poller, SharedVersions};
//!
//! # async fn demo() -> Result<(), volcanoyt_versions::VersionError> {
//! let settings = PollSettings::default();
//! let source = Arc::new(HttpSource::new(settings.request_timeout)?);
//! let versions = Arc::new(SharedVersions::default());
//!
//! let handle = Poller::new(source, Arc::clone(&versions), &settings).spawn();
//! // ... later, when the page goes away
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! The scheduler ([`Poller`]) and [`SharedVersions`] are native only; the
//! browser drives [`poll_cycle`] from its own timer.

pub mod endpoint;
pub mod error;
pub mod extract;
pub mod poll;
#[cfg(not(target_arch = "wasm32"))]
pub mod poller;
pub mod service;
pub mod settings;
pub mod source;
pub mod state;

pub use endpoint::{CacheBust, Endpoint};
pub use error::{FailureKind, VersionError};
pub use extract::extract_version;
pub use poll::{CycleReport, Outcome, poll_cycle, poll_service};
#[cfg(not(target_arch = "wasm32"))]
pub use poller::{Poller, PollerHandle};
pub use service::{Service, UnknownService};
pub use settings::PollSettings;
pub use source::{HttpSource, VersionSource};
#[cfg(not(target_arch = "wasm32"))]
pub use state::SharedVersions;
pub use state::{VersionSink, VersionState};
