//! Native poll scheduler.
//!
//! One cycle fires immediately, then one per interval until the shutdown
//! token is cancelled. Cycles run on their own tasks so a slow endpoint
//! never delays the timer; a cycle that is still in flight when the next
//! tick arrives is left alone (writes are last-write-wins).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::endpoint::Endpoint;
use crate::poll::poll_cycle;
use crate::settings::PollSettings;
use crate::source::VersionSource;
use crate::state::VersionSink;

// tokio::time::interval panics on a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct Poller<S, K> {
    source: Arc<S>,
    sink: Arc<K>,
    endpoints: Arc<[Endpoint]>,
    interval: Duration,
    cycles: Arc<AtomicU64>,
}

impl<S, K> Poller<S, K>
where
    S: VersionSource + Send + Sync + 'static,
    K: VersionSink + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>, sink: Arc<K>, settings: &PollSettings) -> Self {
        Self {
            source,
            sink,
            endpoints: settings.endpoints.clone().into(),
            interval: settings.interval.max(MIN_INTERVAL),
            cycles: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Drive the schedule until `shutdown` is cancelled.
    ///
    /// Cycles still in flight at shutdown are aborted, so nothing is
    /// published after this returns.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut inflight = JoinSet::new();

        info!(
            services = self.endpoints.len(),
            interval_secs = self.interval.as_secs(),
            "version poller started"
        );

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    while inflight.try_join_next().is_some() {}
                    let cycle = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;
                    if !inflight.is_empty() {
                        debug!(cycle, in_flight = inflight.len(), "previous cycle still running");
                    }

                    let source = Arc::clone(&self.source);
                    let sink = Arc::clone(&self.sink);
                    let endpoints = Arc::clone(&self.endpoints);
                    inflight.spawn(async move {
                        let report = poll_cycle(&*source, &endpoints, &*sink).await;
                        debug!(
                            cycle,
                            updated = report.updated().count(),
                            failed = report.failures().count(),
                            "poll cycle finished"
                        );
                    });
                }
            }
        }

        inflight.abort_all();
        info!(cycles = self.cycles.load(Ordering::SeqCst), "version poller stopped");
    }

    /// Start the schedule on the current runtime.
    pub fn spawn(self) -> PollerHandle {
        let shutdown = CancellationToken::new();
        let cycles = Arc::clone(&self.cycles);
        let task = tokio::spawn(self.run(shutdown.clone()));
        PollerHandle {
            shutdown,
            cycles,
            task,
        }
    }
}

/// Owner of a spawned [`Poller`]. Dropping it does not stop the poller;
/// call [`PollerHandle::shutdown`].
pub struct PollerHandle {
    shutdown: CancellationToken,
    cycles: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Cycles started so far.
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Cancel the timer and wait for the loop to exit.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            tracing::warn!("version poller task ended abnormally: {e}");
        }
    }
}
