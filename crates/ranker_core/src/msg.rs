#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the job description text.
    JobDescriptionChanged(String),
    /// Files arrived from the picker or a drop. Replaces the selection.
    FilesSelected(Vec<crate::RawFile>),
    /// User clicked Upload & Analyze.
    SubmitClicked,
    /// User clicked Update.
    UpdateClicked,
    /// User clicked Clear.
    ClearClicked,
    /// Engine finished a submission.
    ResponseArrived {
        seq: crate::SubmissionSeq,
        outcome: crate::SubmissionOutcome,
    },
    /// User asked to preview the candidate at `index` of the current results.
    PreviewRequested { index: usize },
    /// User closed the preview.
    PreviewClosed,
}
