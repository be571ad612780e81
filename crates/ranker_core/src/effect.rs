use crate::{CandidateFile, SubmissionSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the batch to the scoring service; report back with the same `seq`.
    Submit {
        seq: SubmissionSeq,
        request: SubmissionRequest,
    },
    /// Bring the results region into view. Headless runners ignore it.
    RevealResults,
    /// Show a user-facing message (validation or guidance).
    Alert { message: String },
}

/// Snapshot of the inputs at submit time, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub job_description: String,
    pub files: Vec<CandidateFile>,
}

impl SubmissionRequest {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.byte_size).sum()
    }
}
