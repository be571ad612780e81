use std::collections::HashSet;

use pretty_assertions::assert_eq;
use ranker_core::{normalize, update, Msg, RawFile, Session};

fn file(name: &str, media_type: &str, size: usize) -> RawFile {
    RawFile::new(name, media_type, vec![0u8; size])
}

fn names(state: &Session) -> Vec<String> {
    state.selection().iter().map(|f| f.name.clone()).collect()
}

#[test]
fn duplicates_and_non_pdfs_are_dropped() {
    let selection = normalize(vec![
        file("a.pdf", "application/pdf", 100),
        file("a.pdf", "application/pdf", 100),
        file("b.txt", "text/plain", 50),
    ]);

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.files()[0].name, "a.pdf");
    assert_eq!(selection.files()[0].byte_size, 100);
}

#[test]
fn output_keeps_first_occurrence_order_without_repeats() {
    let input = vec![
        file("c.pdf", "application/pdf", 3),
        file("a.pdf", "application/pdf", 1),
        file("notes.docx", "application/msword", 9),
        file("c.pdf", "application/pdf", 3),
        file("b.pdf", "application/pdf", 2),
        file("a.pdf", "application/pdf", 1),
    ];
    let selection = normalize(input);

    let order: Vec<_> = selection.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(order, vec!["c.pdf", "a.pdf", "b.pdf"]);

    let keys: HashSet<_> = selection.iter().map(|f| f.identity_key()).collect();
    assert_eq!(keys.len(), selection.len());
}

#[test]
fn all_non_pdf_input_yields_empty_selection() {
    let selection = normalize(vec![
        file("photo.png", "image/png", 10),
        file("cv.pdf", "", 10),
    ]);
    assert!(selection.is_empty());
    assert!(normalize(Vec::new()).is_empty());
}

#[test]
fn new_intake_replaces_previous_selection() {
    let (state, _) = update(
        Session::new(),
        Msg::FilesSelected(vec![
            file("a.pdf", "application/pdf", 1),
            file("b.pdf", "application/pdf", 2),
        ]),
    );
    assert_eq!(names(&state), vec!["a.pdf", "b.pdf"]);

    let (state, effects) = update(
        state,
        Msg::FilesSelected(vec![file("c.pdf", "application/pdf", 3)]),
    );
    assert_eq!(names(&state), vec!["c.pdf"]);
    assert!(effects.is_empty());

    let (mut state, _) = update(state, Msg::FilesSelected(vec![file("x.txt", "text/plain", 1)]));
    assert!(state.selection().is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn chips_show_human_sizes() {
    let (state, _) = update(
        Session::new(),
        Msg::FilesSelected(vec![file("big.pdf", "application/pdf", 2048)]),
    );
    let view = state.view();
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.files[0].name, "big.pdf");
    assert_eq!(view.files[0].size_label, "2 KB");
}
