//! Failure taxonomy for a single service poll.
//!
//! Every variant is handled the same way by the poll cycle: logged, then the
//! service keeps its last known version. The kinds only exist so logs and
//! CLI output can say *why* a version is missing.

use serde::Serialize;
use thiserror::Error;

/// Why a service produced no version this cycle.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Connection refused, DNS, TLS, timeout, or the body could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a JSON document.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body parsed, but the version field was absent or unusable.
    #[error("field '{field}' missing or not a version")]
    MissingField { field: String },

    /// The configured endpoint URL could not be parsed.
    #[error("invalid endpoint url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Coarse failure class, one per row of the error taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Transport,
    Status,
    Parse,
}

impl VersionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            VersionError::Transport(_) => FailureKind::Transport,
            VersionError::Status(_) => FailureKind::Status,
            VersionError::Malformed(_)
            | VersionError::MissingField { .. }
            | VersionError::InvalidUrl { .. } => FailureKind::Parse,
        }
    }
}
