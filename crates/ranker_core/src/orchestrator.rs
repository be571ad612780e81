use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::{FileSelection, Results, SubmissionRequest};

/// Monotonic id of a submission attempt. Never reset, not even by Clear.
pub type SubmissionSeq = u64;

/// What the engine reports for one submission.
pub type SubmissionOutcome = Result<Results, SubmissionFailure>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight {
        seq: SubmissionSeq,
    },
    Succeeded(Arc<Results>),
    Failed(SubmissionFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmissionFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Upload failed: {}", self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service could not be reached.
    Transport,
    /// The optional client-side timeout expired.
    Timeout,
    /// The service answered with a non-success status.
    Service { status: u16 },
    /// Success status, but the body could not be used.
    Malformed,
}

/// Rejections that never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please paste the job description")]
    EmptyJobDescription,
    #[error("Please select at least one PDF file")]
    NoFiles,
    #[error("No previous analysis to update. Use Upload first.")]
    NothingToUpdate,
    #[error("An analysis is already running")]
    Busy,
}

impl ValidationError {
    /// Whether the user should be told about it. A repeated click while a
    /// submission is running is dropped quietly.
    pub fn is_user_facing(self) -> bool {
        !matches!(self, ValidationError::Busy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDisposition {
    Succeeded,
    Failed,
    /// Superseded or cleared; nothing changed.
    Stale,
}

/// Owner of the submission workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Orchestrator {
    state: SubmissionState,
    last_issued: SubmissionSeq,
    last_results: Option<Arc<Results>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::InFlight { .. })
    }

    pub fn last_issued(&self) -> SubmissionSeq {
        self.last_issued
    }

    /// Most recent successful results; survives later failures.
    pub fn last_results(&self) -> Option<&Arc<Results>> {
        self.last_results.as_ref()
    }

    /// Validates inputs and moves to `InFlight`. On error the state is untouched.
    pub fn submit(
        &mut self,
        job_description: &str,
        selection: &FileSelection,
    ) -> Result<(SubmissionSeq, SubmissionRequest), ValidationError> {
        if self.is_in_flight() {
            return Err(ValidationError::Busy);
        }
        if job_description.trim().is_empty() {
            return Err(ValidationError::EmptyJobDescription);
        }
        if selection.is_empty() {
            return Err(ValidationError::NoFiles);
        }

        self.last_issued += 1;
        let seq = self.last_issued;
        self.state = SubmissionState::InFlight { seq };
        let request = SubmissionRequest {
            job_description: job_description.to_string(),
            files: selection.files().to_vec(),
        };
        Ok((seq, request))
    }

    /// Re-runs the whole pipeline with the current inputs; only allowed once
    /// results are showing.
    pub fn resubmit(
        &mut self,
        job_description: &str,
        selection: &FileSelection,
    ) -> Result<(SubmissionSeq, SubmissionRequest), ValidationError> {
        match self.state {
            SubmissionState::Succeeded(_) => self.submit(job_description, selection),
            SubmissionState::InFlight { .. } => Err(ValidationError::Busy),
            SubmissionState::Idle | SubmissionState::Failed(_) => {
                Err(ValidationError::NothingToUpdate)
            }
        }
    }

    pub fn apply_response(
        &mut self,
        seq: SubmissionSeq,
        outcome: SubmissionOutcome,
    ) -> ResponseDisposition {
        let current = matches!(self.state, SubmissionState::InFlight { seq: s } if s == seq);
        if !current || seq != self.last_issued {
            return ResponseDisposition::Stale;
        }

        match outcome {
            Ok(results) => {
                let results = Arc::new(results);
                self.last_results = Some(Arc::clone(&results));
                self.state = SubmissionState::Succeeded(results);
                ResponseDisposition::Succeeded
            }
            Err(failure) => {
                self.state = SubmissionState::Failed(failure);
                ResponseDisposition::Failed
            }
        }
    }

    /// Back to `Idle` with no results. An in-flight response becomes stale.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.last_results = None;
    }
}
