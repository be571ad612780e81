use std::fmt;

use ranker_core::{FailureKind, Results, SubmissionFailure, SubmissionSeq};
use thiserror::Error;

pub(crate) const UNREACHABLE_MESSAGE: &str = "Could not reach the scoring service";
pub(crate) const TIMEOUT_MESSAGE: &str = "The scoring service did not respond in time";

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SubmissionCompleted {
        seq: SubmissionSeq,
        result: Result<Results, ScoreError>,
    },
}

/// A failed scoring call. `message` is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ScoreError {
    pub kind: ScoreErrorKind,
    pub message: String,
}

impl ScoreError {
    pub(crate) fn new(kind: ScoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreErrorKind {
    /// The request could not be assembled or the client could not be built.
    InvalidRequest,
    Network,
    Timeout,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
}

impl fmt::Display for ScoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreErrorKind::InvalidRequest => write!(f, "invalid request"),
            ScoreErrorKind::Network => write!(f, "network error"),
            ScoreErrorKind::Timeout => write!(f, "timeout"),
            ScoreErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ScoreErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            ScoreErrorKind::MalformedBody => write!(f, "malformed body"),
        }
    }
}

impl From<ScoreError> for SubmissionFailure {
    fn from(err: ScoreError) -> Self {
        let kind = match err.kind {
            ScoreErrorKind::InvalidRequest | ScoreErrorKind::Network => FailureKind::Transport,
            ScoreErrorKind::Timeout => FailureKind::Timeout,
            ScoreErrorKind::HttpStatus(status) => FailureKind::Service { status },
            ScoreErrorKind::TooLarge { .. } | ScoreErrorKind::MalformedBody => {
                FailureKind::Malformed
            }
        };
        SubmissionFailure::new(kind, err.message)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine: {0}")]
    Startup(#[from] std::io::Error),
    #[error("scoring client unavailable: {0}")]
    Client(#[from] ScoreError),
    #[error("engine thread has stopped")]
    Disconnected,
}
