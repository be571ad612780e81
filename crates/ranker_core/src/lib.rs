//! Ranker core: pure submission state machine, intake normalization and
//! results view-model helpers.
mod effect;
mod intake;
mod msg;
mod orchestrator;
mod preview;
mod results;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, SubmissionRequest};
pub use intake::{
    format_file_size, normalize, CandidateFile, FileSelection, RawFile, PDF_MEDIA_TYPE,
};
pub use msg::Msg;
pub use orchestrator::{
    FailureKind, Orchestrator, ResponseDisposition, SubmissionFailure, SubmissionOutcome,
    SubmissionSeq, SubmissionState, ValidationError,
};
pub use preview::{PreviewController, PreviewState};
pub use results::{
    CandidateResult, Contacts, ParsedResume, Results, ScoreTier, DEFAULT_KEYWORD_DISPLAY_LIMIT,
    NO_PREVIEW_PLACEHOLDER,
};
pub use state::Session;
pub use update::update;
pub use view_model::{CandidateRowView, FileChipView, Phase, ResultsView, SessionViewModel};
