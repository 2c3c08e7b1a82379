//! One poll cycle: every endpoint fetched concurrently, each in isolation.

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::endpoint::Endpoint;
use crate::error::VersionError;
use crate::extract::extract_version;
use crate::service::Service;
use crate::source::VersionSource;
use crate::state::VersionSink;

/// What happened to one service during a cycle.
#[derive(Debug)]
pub enum Outcome {
    /// New version stored.
    Updated(String),
    /// Version read, identical to the stored one.
    Unchanged(String),
    /// Nothing usable this cycle; the stored version (if any) stays.
    Failed(VersionError),
}

/// Per-service outcomes of a cycle, in endpoint order.
#[derive(Debug, Default)]
pub struct CycleReport {
    pub outcomes: Vec<(Service, Outcome)>,
}

impl CycleReport {
    pub fn get(&self, service: Service) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(svc, _)| *svc == service)
            .map(|(_, outcome)| outcome)
    }

    /// Services whose version changed this cycle.
    pub fn updated(&self) -> impl Iterator<Item = (Service, &str)> {
        self.outcomes.iter().filter_map(|(svc, outcome)| match outcome {
            Outcome::Updated(v) => Some((*svc, v.as_str())),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (Service, &VersionError)> {
        self.outcomes.iter().filter_map(|(svc, outcome)| match outcome {
            Outcome::Failed(e) => Some((*svc, e)),
            _ => None,
        })
    }
}

/// Fetch and parse a single service's version.
pub async fn poll_service<S>(source: &S, endpoint: &Endpoint) -> Result<String, VersionError>
where
    S: VersionSource + ?Sized,
{
    let url = endpoint.request_url()?;
    let body = source.fetch(&url).await?;
    extract_version(&body, &endpoint.field)
}

/// Poll every endpoint once.
///
/// Fetches run concurrently and each publishes to `sink` the moment it
/// resolves, so a slow or failing service never delays the others. Errors
/// are logged and recorded in the report; nothing is propagated.
pub async fn poll_cycle<S, K>(source: &S, endpoints: &[Endpoint], sink: &K) -> CycleReport
where
    S: VersionSource + ?Sized,
    K: VersionSink + ?Sized,
{
    let polls = endpoints.iter().map(|endpoint| async move {
        let service = endpoint.service;
        let outcome = match poll_service(source, endpoint).await {
            Ok(version) => {
                if sink.publish(service, &version) {
                    info!(service = %service, version = %version, "version updated");
                    Outcome::Updated(version)
                } else {
                    debug!(service = %service, version = %version, "version unchanged");
                    Outcome::Unchanged(version)
                }
            }
            Err(error) => {
                warn!(
                    service = %service,
                    kind = ?error.kind(),
                    error = %error,
                    "failed to fetch version"
                );
                Outcome::Failed(error)
            }
        };
        (service, outcome)
    });

    CycleReport {
        outcomes: join_all(polls).await,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Reply, ScriptedSource};
    use super::*;
    use crate::endpoint::CacheBust;
    use crate::error::FailureKind;
    use crate::state::SharedVersions;

    fn endpoints() -> Vec<Endpoint> {
        vec![
            Endpoint::new(
                Service::WebMap,
                "https://fake.test/map",
                "version",
                CacheBust::timestamp("t"),
            ),
            Endpoint::new(
                Service::AndroidApp,
                "https://fake.test/android",
                "versionName",
                CacheBust::random("alist_ts"),
            ),
            Endpoint::new(
                Service::WebPortal,
                "https://fake.test/portal",
                "version",
                CacheBust::timestamp("t"),
            ),
            Endpoint::new(
                Service::Api,
                "https://fake.test/api",
                "version",
                CacheBust::timestamp("t"),
            ),
        ]
    }

    #[tokio::test]
    async fn success_updates_only_that_service() {
        let source = ScriptedSource::default();
        source.set("/map", Reply::Json(r#"{"version":"1.4.2"}"#));
        let shared = SharedVersions::default();

        let report = poll_cycle(&source, &endpoints(), &shared).await;

        let state = shared.snapshot();
        assert_eq!(state.get(Service::WebMap), Some("1.4.2"));
        assert_eq!(state.get(Service::AndroidApp), None);
        assert_eq!(state.get(Service::WebPortal), None);
        assert_eq!(state.get(Service::Api), None);
        assert_eq!(source.calls(), 4);
        assert_eq!(report.updated().collect::<Vec<_>>(), vec![(Service::WebMap, "1.4.2")]);
        assert_eq!(report.failures().count(), 3);
    }

    #[tokio::test]
    async fn server_error_keeps_previous_version() {
        let source = ScriptedSource::default();
        source.set("/map", Reply::Json(r#"{"version":"1.4.2"}"#));
        let shared = SharedVersions::default();
        poll_cycle(&source, &endpoints(), &shared).await;

        source.set("/map", Reply::Status(500));
        let report = poll_cycle(&source, &endpoints(), &shared).await;

        assert_eq!(shared.snapshot().get(Service::WebMap), Some("1.4.2"));
        match report.get(Service::WebMap) {
            Some(Outcome::Failed(e)) => assert_eq!(e.kind(), FailureKind::Status),
            other => panic!("expected status failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn network_failure_leaves_unknown_service_unknown() {
        let source = ScriptedSource::default();
        source.set("/api", Reply::Unreachable);
        let shared = SharedVersions::default();

        let report = poll_cycle(&source, &endpoints(), &shared).await;

        assert_eq!(shared.snapshot().get(Service::Api), None);
        match report.get(Service::Api) {
            Some(Outcome::Failed(e)) => assert_eq!(e.kind(), FailureKind::Transport),
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_treated_as_failure() {
        let source = ScriptedSource::default();
        source.set("/android", Reply::Json(r#"{"versionName":"2.0.0","versionCode":45}"#));
        let shared = SharedVersions::default();
        poll_cycle(&source, &endpoints(), &shared).await;

        // Build number only: the stored name must survive.
        source.set("/android", Reply::Json(r#"{"versionCode":46}"#));
        let report = poll_cycle(&source, &endpoints(), &shared).await;

        assert_eq!(shared.snapshot().get(Service::AndroidApp), Some("2.0.0"));
        assert!(matches!(
            report.get(Service::AndroidApp),
            Some(Outcome::Failed(VersionError::MissingField { .. }))
        ));
    }

    #[tokio::test]
    async fn repeated_polls_are_idempotent() {
        let source = ScriptedSource::default();
        source.set("/portal", Reply::Json(r#"{"version":"5.0.1"}"#));
        let shared = SharedVersions::default();
        let mut rx = shared.subscribe();

        poll_cycle(&source, &endpoints(), &shared).await;
        assert!(rx.has_changed().unwrap());
        let _ = rx.borrow_and_update();

        let report = poll_cycle(&source, &endpoints(), &shared).await;
        assert!(!rx.has_changed().unwrap());
        assert!(matches!(
            report.get(Service::WebPortal),
            Some(Outcome::Unchanged(v)) if v == "5.0.1"
        ));
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_others() {
        let source = ScriptedSource::default();
        source.set("/map", Reply::Unreachable);
        source.set("/android", Reply::Json(r#"{"versionName":"2.0.0"}"#));
        source.set("/portal", Reply::Json("not json"));
        source.set("/api", Reply::Json(r#"{"version":"3.1.0"}"#));
        let shared = SharedVersions::default();

        poll_cycle(&source, &endpoints(), &shared).await;

        let state = shared.snapshot();
        assert_eq!(state.get(Service::WebMap), None);
        assert_eq!(state.get(Service::AndroidApp), Some("2.0.0"));
        assert_eq!(state.get(Service::WebPortal), None);
        assert_eq!(state.get(Service::Api), Some("3.1.0"));
    }

    #[tokio::test]
    async fn bad_endpoint_url_fails_without_fetching() {
        let source = ScriptedSource::default();
        let shared = SharedVersions::default();
        let eps = vec![Endpoint::new(
            Service::Api,
            "::not-a-url::",
            "version",
            CacheBust::timestamp("t"),
        )];

        let report = poll_cycle(&source, &eps, &shared).await;

        assert_eq!(source.calls(), 0);
        assert!(matches!(
            report.get(Service::Api),
            Some(Outcome::Failed(VersionError::InvalidUrl { .. }))
        ));
    }
}
