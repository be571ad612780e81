use crate::{
    format_file_size, CandidateResult, PreviewState, Results, ScoreTier, Session, SubmissionState,
    DEFAULT_KEYWORD_DISPLAY_LIMIT,
};

const SUBMIT_LABEL: &str = "Upload & Analyze";
const SUBMIT_BUSY_LABEL: &str = "Analyzing...";
const UNKNOWN_CONTACT: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionViewModel {
    pub job_description: String,
    pub files: Vec<FileChipView>,
    pub phase: Phase,
    pub submit_label: &'static str,
    pub can_submit: bool,
    pub can_update: bool,
    /// Message of the last failed attempt, while it is the current state.
    pub error: Option<String>,
    /// Last successful results; still shown after a failed resubmission.
    pub results: Option<ResultsView>,
    pub preview: Option<PreviewState>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChipView {
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub keywords_line: String,
    pub keyword_count: usize,
    pub rows: Vec<CandidateRowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRowView {
    pub filename: String,
    pub contact_name: String,
    pub score_label: String,
    /// Bar width in percent, always within `[0, 100]`.
    pub bar_percent: f64,
    pub tier: ScoreTier,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_links: bool,
    pub match_count: usize,
    pub matches_label: String,
    pub download_url: Option<String>,
}

impl SessionViewModel {
    pub(crate) fn build(session: &Session, dirty: bool) -> Self {
        let orchestrator = session.orchestrator();
        let (phase, error) = match orchestrator.state() {
            SubmissionState::Idle => (Phase::Idle, None),
            SubmissionState::InFlight { .. } => (Phase::Analyzing, None),
            SubmissionState::Succeeded(_) => (Phase::Done, None),
            SubmissionState::Failed(failure) => (Phase::Failed, Some(failure.to_string())),
        };
        let busy = phase == Phase::Analyzing;

        Self {
            job_description: session.job_description().to_string(),
            files: session
                .selection()
                .iter()
                .map(|file| FileChipView {
                    name: file.name.clone(),
                    size_label: format_file_size(file.byte_size),
                })
                .collect(),
            phase,
            submit_label: if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
            can_submit: !busy,
            can_update: phase == Phase::Done,
            error,
            results: orchestrator
                .last_results()
                .map(|results| ResultsView::build(results)),
            preview: session.preview().current().cloned(),
            dirty,
        }
    }
}

impl ResultsView {
    fn build(results: &Results) -> Self {
        let keyword_count = results.keywords.len();
        Self {
            keywords_line: results.keywords_line(DEFAULT_KEYWORD_DISPLAY_LIMIT),
            keyword_count,
            rows: results
                .entries
                .iter()
                .map(|candidate| CandidateRowView::build(candidate, keyword_count))
                .collect(),
        }
    }
}

impl CandidateRowView {
    fn build(candidate: &CandidateResult, keyword_count: usize) -> Self {
        let match_count = candidate.match_count();
        Self {
            filename: candidate.filename.clone(),
            contact_name: candidate
                .contact_name()
                .unwrap_or(UNKNOWN_CONTACT)
                .to_string(),
            score_label: candidate.score_label(),
            bar_percent: candidate.clamped_score(),
            tier: candidate.score_tier(),
            has_email: candidate.has_email(),
            has_phone: candidate.has_phone(),
            has_links: candidate.has_links(),
            match_count,
            matches_label: format!("Matches: {match_count} / {keyword_count}"),
            download_url: candidate.download_url.clone(),
        }
    }
}
