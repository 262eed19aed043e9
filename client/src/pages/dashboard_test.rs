use super::*;
use crate::state::dashboard::{SelectedFile, SingleResult};

fn selected(name: &str) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: "image/png".to_owned(), bytes: vec![0].into(), preview: None }
}

#[test]
fn status_text_is_empty_when_idle() {
    let state = DashboardState::default();
    assert_eq!(status_text(state.phase(), &state), None);
}

#[test]
fn status_text_counts_uploads_while_busy() {
    let mut state = DashboardState::default();
    state.set_files(vec![selected("a.png"), selected("b.png")]);
    assert!(state.begin_run());
    assert_eq!(status_text(state.phase(), &state).as_deref(), Some("Uploading 2 file(s)..."));
}

#[test]
fn status_text_names_single_download() {
    let mut state = DashboardState::default();
    state.set_files(vec![selected("a.png")]);
    state.begin_run();
    state.complete_run(crate::state::dashboard::ProcessOutcome::Single(SingleResult {
        name: "a.jpg".to_owned(),
        mime: "image/jpeg".to_owned(),
        bytes: vec![1].into(),
    }));
    assert_eq!(status_text(state.phase(), &state).as_deref(), Some("Downloaded a.jpg"));
}

#[test]
fn status_text_hidden_after_failure() {
    let mut state = DashboardState::default();
    state.set_files(vec![selected("a.png")]);
    state.begin_run();
    state.fail_run("Processing failed".to_owned());
    assert_eq!(status_text(state.phase(), &state), None);
}

#[test]
fn archive_error_message_wraps_cause() {
    let err = crate::util::archive::unpack(b"not a zip").unwrap_err();
    assert!(archive_error_message(&err).starts_with("Could not read the returned archive: "));
}
