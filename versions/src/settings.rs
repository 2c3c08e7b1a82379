use std::time::Duration;

use crate::endpoint::Endpoint;
use crate::service::Service;

/// Hourly, like the page has always done.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved poll parameters shared by the browser and native hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub request_timeout: Duration,
    pub endpoints: Vec<Endpoint>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            endpoints: Service::ALL.into_iter().map(Endpoint::volcanoyt).collect(),
        }
    }
}

impl PollSettings {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Vec<Endpoint>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoint(&self, service: Service) -> Option<&Endpoint> {
        self.endpoints.iter().find(|ep| ep.service == service)
    }
}
