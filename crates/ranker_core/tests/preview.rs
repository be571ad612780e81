use ranker_core::{
    update, CandidateResult, Contacts, Effect, Msg, ParsedResume, RawFile, Results, Session,
    NO_PREVIEW_PLACEHOLDER,
};

fn candidate(filename: &str, excerpt: Option<&str>, name: Option<&str>) -> CandidateResult {
    CandidateResult {
        filename: filename.to_string(),
        score: 50.0,
        excerpt: excerpt.map(str::to_string),
        parsed: Some(ParsedResume {
            contacts: Some(Contacts {
                name: name.map(str::to_string),
                ..Contacts::default()
            }),
            matches: None,
        }),
        download_url: None,
    }
}

fn session_with(entries: Vec<CandidateResult>) -> Session {
    let (state, _) = update(Session::new(), Msg::JobDescriptionChanged("Go developer".into()));
    let (state, _) = update(
        state,
        Msg::FilesSelected(vec![RawFile::new("r1.pdf", "application/pdf", vec![1u8; 8])]),
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    let Some(Effect::Submit { seq, .. }) = effects.first() else {
        panic!("expected submit effect");
    };
    let (mut state, _) = update(
        state,
        Msg::ResponseArrived {
            seq: *seq,
            outcome: Ok(Results {
                keywords: vec!["go".to_string()],
                entries,
            }),
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn preview_falls_back_from_excerpt_to_name_to_placeholder() {
    let state = session_with(vec![
        candidate("a.pdf", Some("Built Go services"), Some("Ada")),
        candidate("b.pdf", None, Some("Grace Hopper")),
        candidate("c.pdf", None, None),
    ]);

    let (state, _) = update(state, Msg::PreviewRequested { index: 0 });
    assert_eq!(state.view().preview.unwrap().text, "Built Go services");

    let (state, _) = update(state, Msg::PreviewRequested { index: 1 });
    let preview = state.view().preview.unwrap();
    assert_eq!(preview.filename, "b.pdf");
    assert_eq!(preview.text, "Grace Hopper");

    let (state, _) = update(state, Msg::PreviewRequested { index: 2 });
    assert_eq!(state.view().preview.unwrap().text, NO_PREVIEW_PLACEHOLDER);
}

#[test]
fn out_of_range_preview_is_ignored() {
    let state = session_with(vec![candidate("a.pdf", None, None)]);
    let before = state.clone();

    let (mut after, effects) = update(state, Msg::PreviewRequested { index: 5 });

    assert_eq!(after, before);
    assert!(effects.is_empty());
    assert!(!after.consume_dirty());
}

#[test]
fn preview_outlives_the_results_it_was_copied_from() {
    let state = session_with(vec![candidate("a.pdf", Some("excerpt"), None)]);
    let (state, _) = update(state, Msg::PreviewRequested { index: 0 });
    let (state, _) = update(state, Msg::ClearClicked);

    let preview = state.view().preview.expect("preview stays open");
    assert_eq!(preview.filename, "a.pdf");
    assert_eq!(preview.text, "excerpt");

    let (mut state, _) = update(state, Msg::PreviewClosed);
    assert!(state.view().preview.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn closing_without_preview_is_noop() {
    let state = Session::new();
    let (mut next, effects) = update(state.clone(), Msg::PreviewClosed);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
