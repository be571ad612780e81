use ranker_core::{
    update, Effect, FailureKind, Msg, RawFile, Results, Session, SubmissionFailure, SubmissionSeq,
    SubmissionState,
};

fn submit(state: Session) -> (Session, SubmissionSeq) {
    let (state, effects) = update(state, Msg::SubmitClicked);
    let seq = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Submit { seq, .. } => Some(*seq),
            _ => None,
        })
        .expect("submit effect");
    (state, seq)
}

fn ready(state: Session) -> Session {
    let (state, _) = update(state, Msg::JobDescriptionChanged("Go developer".into()));
    let (state, _) = update(
        state,
        Msg::FilesSelected(vec![RawFile::new("r1.pdf", "application/pdf", vec![1u8; 8])]),
    );
    state
}

fn results(keyword: &str) -> Results {
    Results {
        keywords: vec![keyword.to_string()],
        entries: Vec::new(),
    }
}

#[test]
fn clear_during_flight_discards_eventual_response() {
    let (state, seq) = submit(ready(Session::new()));
    let (mut state, _) = update(state, Msg::ClearClicked);
    assert!(state.consume_dirty());
    assert_eq!(state.orchestrator().state(), &SubmissionState::Idle);
    let before = state.clone();

    let (mut after, effects) = update(
        state,
        Msg::ResponseArrived {
            seq,
            outcome: Ok(results("go")),
        },
    );

    assert_eq!(after, before);
    assert!(effects.is_empty());
    assert!(!after.consume_dirty());
    assert!(after.view().results.is_none());
}

#[test]
fn response_from_superseded_submission_is_dropped() {
    let (state, first) = submit(ready(Session::new()));
    let (state, _) = update(state, Msg::ClearClicked);
    let (state, second) = submit(ready(state));
    assert!(second > first);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::ResponseArrived {
            seq: first,
            outcome: Err(SubmissionFailure::new(FailureKind::Transport, "offline")),
        },
    );
    assert_eq!(state, before);
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::ResponseArrived {
            seq: second,
            outcome: Ok(results("second")),
        },
    );
    let SubmissionState::Succeeded(applied) = state.orchestrator().state() else {
        panic!("latest response should apply");
    };
    assert_eq!(applied.keywords, vec!["second"]);
}

#[test]
fn duplicate_delivery_after_success_is_ignored() {
    let (state, seq) = submit(ready(Session::new()));
    let (state, _) = update(
        state,
        Msg::ResponseArrived {
            seq,
            outcome: Ok(results("go")),
        },
    );
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::ResponseArrived {
            seq,
            outcome: Err(SubmissionFailure::new(FailureKind::Timeout, "late")),
        },
    );

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn unknown_sequence_number_is_ignored_when_idle() {
    let before = Session::new();
    let (after, effects) = update(
        before.clone(),
        Msg::ResponseArrived {
            seq: 42,
            outcome: Ok(results("go")),
        },
    );
    assert_eq!(after, before);
    assert!(effects.is_empty());
}
