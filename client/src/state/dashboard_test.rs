use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use super::*;

fn file(name: &str) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: "image/png".to_owned(), bytes: vec![1, 2, 3].into(), preview: None }
}

fn zip_of(names: &[&str]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.add_directory("nested/", SimpleFileOptions::default()).unwrap();
    for name in names {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(name.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn batch_state(names: &[&str]) -> DashboardState {
    let mut state = DashboardState::default();
    state.set_files(vec![file("a.png"), file("b.png")]);
    assert!(state.begin_run());
    let response = ProcessedResponse { bytes: zip_of(names), ..ProcessedResponse::default() };
    let outcome = interpret_response(2, OutputFormat::Jpeg, response).unwrap();
    assert!(state.complete_run(outcome).is_none());
    state
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn single_file_yields_direct_download_named_by_header() {
    let response = ProcessedResponse {
        bytes: vec![0xff, 0xd8],
        content_disposition: Some(r#"attachment; filename="cat-resized.jpg""#.to_owned()),
        content_type: Some("image/jpeg".to_owned()),
    };
    let outcome = interpret_response(1, OutputFormat::Jpeg, response).unwrap();
    assert_eq!(
        outcome,
        ProcessOutcome::Single(SingleResult {
            name: "cat-resized.jpg".to_owned(),
            mime: "image/jpeg".to_owned(),
            bytes: vec![0xff, 0xd8].into(),
        })
    );
}

#[test]
fn single_file_without_header_uses_fallback_name_and_format_mime() {
    let response = ProcessedResponse { bytes: vec![1], content_disposition: None, content_type: None };
    let ProcessOutcome::Single(single) = interpret_response(1, OutputFormat::Webp, response).unwrap() else {
        panic!("expected single result");
    };
    assert_eq!(single.name, "processed-image.webp");
    assert_eq!(single.mime, "image/webp");
}

#[test]
fn single_file_is_never_unzipped() {
    let response = ProcessedResponse { bytes: zip_of(&["x.jpg"]), ..ProcessedResponse::default() };
    assert!(matches!(
        interpret_response(1, OutputFormat::Jpeg, response).unwrap(),
        ProcessOutcome::Single(_)
    ));
}

#[test]
fn multiple_files_yield_one_entry_per_archived_file() {
    let response = ProcessedResponse { bytes: zip_of(&["a.jpg", "b.jpg", "c.jpg"]), ..ProcessedResponse::default() };
    let ProcessOutcome::Batch { entries, archive } = interpret_response(3, OutputFormat::Jpeg, response).unwrap() else {
        panic!("expected batch result");
    };
    assert_eq!(entries.len(), 3);
    assert!(!archive.is_empty());
}

#[test]
fn multiple_files_with_invalid_archive_is_an_error() {
    let response = ProcessedResponse { bytes: b"oops".to_vec(), ..ProcessedResponse::default() };
    assert!(interpret_response(2, OutputFormat::Png, response).is_err());
}

// =============================================================
// Run lifecycle
// =============================================================

#[test]
fn cannot_process_without_files_or_while_busy() {
    let mut state = DashboardState::default();
    assert!(!state.can_process());
    assert!(!state.begin_run());

    state.set_files(vec![file("a.png")]);
    assert!(state.can_process());
    assert!(state.begin_run());
    assert!(!state.can_process());
    assert!(!state.begin_run());
    assert_eq!(state.phase(), Phase::Busy);
    assert_eq!(state.process_label(), "Processing...");
}

#[test]
fn single_run_stores_result_and_returns_it_for_download() {
    let mut state = DashboardState::default();
    state.set_files(vec![file("a.png")]);
    state.begin_run();
    let single = SingleResult { name: "a.jpg".to_owned(), mime: "image/jpeg".to_owned(), bytes: vec![9].into() };
    let download = state.complete_run(ProcessOutcome::Single(single.clone()));
    assert_eq!(download, Some(single.clone()));
    assert_eq!(state.single, Some(single));
    assert!(!state.busy);
    assert_eq!(state.phase(), Phase::Done);
    assert!(state.live_urls().is_empty());
}

#[test]
fn batch_run_creates_previews_and_archive_link() {
    let state = batch_state(&["a.jpg", "b.jpg"]);
    let names: Vec<_> = state.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    assert!(state.archive.is_some());
    assert_eq!(state.live_urls().len(), 3);
    assert_eq!(state.results[0].mime, "image/jpeg");
    assert_eq!(state.phase(), Phase::Done);
}

#[test]
fn clearing_results_revokes_all_object_urls() {
    let mut state = batch_state(&["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(state.live_urls().len(), 4);

    state.clear_results();
    assert!(state.live_urls().is_empty());
    assert!(state.results.is_empty());
    assert!(state.archive.is_none());
    assert!(state.single.is_none());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn new_run_supersedes_previous_results() {
    let mut state = batch_state(&["a.jpg", "b.jpg"]);
    let old_urls = state.live_urls().to_vec();

    assert!(state.begin_run());
    assert!(state.live_urls().is_empty());
    assert!(state.results.is_empty());

    let response = ProcessedResponse { bytes: zip_of(&["c.jpg", "d.jpg"]), ..ProcessedResponse::default() };
    state.complete_run(interpret_response(2, OutputFormat::Jpeg, response).unwrap());
    assert!(state.live_urls().iter().all(|u| !old_urls.contains(u)));
}

#[test]
fn failed_run_records_error_and_clears_busy() {
    let mut state = DashboardState::default();
    state.set_files(vec![file("a.png")]);
    state.begin_run();
    state.fail_run("Processing failed".to_owned());
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some("Processing failed"));
    assert_eq!(state.phase(), Phase::Failed);

    assert!(state.begin_run());
    assert!(state.error.is_none());
}

#[test]
fn cloning_state_shares_image_bytes() {
    let mut state = batch_state(&["a.jpg", "b.jpg"]);
    state.set_files(vec![file("a.png")]);
    let copy = state.clone();
    assert!(Arc::ptr_eq(&state.files[0].bytes, &copy.files[0].bytes));
    assert!(Arc::ptr_eq(&state.results[1].bytes, &copy.results[1].bytes));
    let (archive, copied) = (state.archive.as_ref().unwrap(), copy.archive.as_ref().unwrap());
    assert!(Arc::ptr_eq(&archive.bytes, &copied.bytes));
}
