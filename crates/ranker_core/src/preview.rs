use crate::CandidateResult;

/// An open preview. Holds copies, never references into `Results`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub filename: String,
    pub text: String,
}

impl PreviewState {
    pub fn from_candidate(candidate: &CandidateResult) -> Self {
        Self {
            filename: candidate.filename.clone(),
            text: candidate.preview_text(),
        }
    }
}

/// Holds at most one open preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewController {
    current: Option<PreviewState>,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a preview, replacing whatever was open.
    pub fn open_preview(&mut self, filename: impl Into<String>, text: impl Into<String>) {
        self.current = Some(PreviewState {
            filename: filename.into(),
            text: text.into(),
        });
    }

    pub fn open_for(&mut self, candidate: &CandidateResult) {
        self.current = Some(PreviewState::from_candidate(candidate));
    }

    /// Returns whether a preview was open.
    pub fn close_preview(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&PreviewState> {
        self.current.as_ref()
    }
}
