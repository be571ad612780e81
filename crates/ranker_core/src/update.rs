use crate::{
    Effect, Msg, ResponseDisposition, Session, SubmissionRequest, SubmissionSeq, ValidationError,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: Session, msg: Msg) -> (Session, Vec<Effect>) {
    let effects = match msg {
        Msg::JobDescriptionChanged(text) => {
            if state.job_description != text {
                state.job_description = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilesSelected(raw) => {
            state.selection = crate::normalize(raw);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            let attempt = state
                .orchestrator
                .submit(&state.job_description, &state.selection);
            submission_effects(&mut state, attempt)
        }
        Msg::UpdateClicked => {
            let attempt = state
                .orchestrator
                .resubmit(&state.job_description, &state.selection);
            submission_effects(&mut state, attempt)
        }
        Msg::ClearClicked => {
            state.clear_inputs();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResponseArrived { seq, outcome } => {
            match state.orchestrator.apply_response(seq, outcome) {
                ResponseDisposition::Succeeded => {
                    state.mark_dirty();
                    vec![Effect::RevealResults]
                }
                ResponseDisposition::Failed => {
                    state.mark_dirty();
                    Vec::new()
                }
                ResponseDisposition::Stale => Vec::new(),
            }
        }
        Msg::PreviewRequested { index } => {
            let candidate = state
                .orchestrator
                .last_results()
                .and_then(|results| results.entries.get(index));
            if let Some(candidate) = candidate {
                state.preview.open_for(candidate);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PreviewClosed => {
            if state.preview.close_preview() {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submission_effects(
    state: &mut Session,
    attempt: Result<(SubmissionSeq, SubmissionRequest), ValidationError>,
) -> Vec<Effect> {
    match attempt {
        Ok((seq, request)) => {
            state.mark_dirty();
            vec![Effect::Submit { seq, request }]
        }
        Err(err) if err.is_user_facing() => vec![Effect::Alert {
            message: err.to_string(),
        }],
        Err(_) => Vec::new(),
    }
}
