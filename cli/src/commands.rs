//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use volcanoyt_page::render_landing_page;
use volcanoyt_versions::{
    CycleReport, FailureKind, HttpSource, Outcome, PollSettings, Poller, Service,
    SharedVersions, VersionState, poll_cycle,
};

/// One poll cycle, printed as a table or JSON.
pub async fn run_check(settings: &PollSettings, json: bool) -> Result<()> {
    let (report, _) = poll_once(settings).await?;

    if json {
        let rows: Vec<CheckRow<'_>> = report.outcomes.iter().map(CheckRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (service, outcome) in &report.outcomes {
        let detail = match outcome {
            Outcome::Updated(v) | Outcome::Unchanged(v) => format!("v{v}"),
            Outcome::Failed(e) => format!("unavailable ({e})"),
        };
        println!("{:<12} {}", service.label(), detail);
    }
    Ok(())
}

/// Poll until Ctrl+C, optionally keeping a prerendered page current.
pub async fn run_watch(settings: &PollSettings, render: Option<&Path>) -> Result<()> {
    let source =
        Arc::new(HttpSource::new(settings.request_timeout).context("failed to build HTTP client")?);
    let versions = Arc::new(SharedVersions::default());

    let handle = Poller::new(source, Arc::clone(&versions), settings).spawn();
    info!(
        interval_secs = settings.interval.as_secs(),
        services = settings.endpoints.len(),
        "watching versions"
    );

    let shutdown = CancellationToken::new();
    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("shutting down"),
            Err(e) => warn!("failed to listen for Ctrl+C: {e}"),
        }
        on_ctrl_c.cancel();
    });

    let result = follow_versions(&versions, render, shutdown).await;
    handle.shutdown().await;
    result
}

/// Render `render` once, then again on every version change until `shutdown`.
///
/// Only the first write is fatal; later write failures are logged and the
/// next change retries.
async fn follow_versions(
    versions: &SharedVersions,
    render: Option<&Path>,
    shutdown: CancellationToken,
) -> Result<()> {
    let mut updates = versions.subscribe();
    if let Some(path) = render {
        write_page(path, &versions.snapshot())?;
    }

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if let Some(path) = render
                    && let Err(e) = write_page(path, &state)
                {
                    warn!(path = %path.display(), error = %format!("{e:#}"), "failed to re-render landing page");
                }
            }
        }
    }
    Ok(())
}

/// Write the static page, after one poll unless `offline`.
pub async fn run_render(settings: &PollSettings, out: &Path, offline: bool) -> Result<()> {
    let state = if offline {
        VersionState::new()
    } else {
        poll_once(settings).await?.1
    };
    write_page(out, &state)
}

async fn poll_once(settings: &PollSettings) -> Result<(CycleReport, VersionState)> {
    let source = HttpSource::new(settings.request_timeout).context("failed to build HTTP client")?;
    let versions = SharedVersions::default();
    let report = poll_cycle(&source, &settings.endpoints, &versions).await;
    Ok((report, versions.snapshot()))
}

fn write_page(path: &Path, state: &VersionState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let html = render_landing_page(state);
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), known = state.iter().count(), "landing page rendered");
    Ok(())
}

#[derive(Serialize)]
struct CheckRow<'a> {
    service: &'a str,
    label: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a (Service, Outcome)> for CheckRow<'a> {
    fn from((service, outcome): &'a (Service, Outcome)) -> Self {
        let (status, version, failure) = match outcome {
            Outcome::Updated(v) | Outcome::Unchanged(v) => ("ok", Some(v.as_str()), None),
            Outcome::Failed(e) => ("failed", None, Some(e)),
        };
        CheckRow {
            service: service.key(),
            label: service.label(),
            status,
            version,
            kind: failure.map(|e| e.kind()),
            error: failure.map(ToString::to_string),
        }
    }
}
