//! Dashboard workflow state: selection, options, run status, and results.
//!
//! DESIGN
//! ======
//! The page drives a small state machine (idle -> busy -> done | failed).
//! Every object URL for previews and the archive link is minted through the
//! owned [`ObjectUrls`] registry so clearing, re-running, or unmounting
//! releases all of them in one place. Image bytes are shared behind `Arc` so
//! cloning the state for a render never copies them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use super::options::{OutputFormat, ProcessingOptions};
use crate::net::types::ProcessedResponse;
use crate::util::archive::{self, ArchiveEntry, ArchiveError};
use crate::util::download::single_result_filename;
use crate::util::object_url::ObjectUrls;

/// An image picked by the user, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
    /// Small data-URL thumbnail, when one could be produced.
    pub preview: Option<String>,
}

/// One previewable output image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItem {
    pub name: String,
    pub url: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// The direct response to a single-file run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleResult {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// The batch archive as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveResult {
    pub url: String,
    pub bytes: Arc<[u8]>,
}

/// A successful response, classified by how many files were uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessOutcome {
    Single(SingleResult),
    Batch { archive: Vec<u8>, entries: Vec<ArchiveEntry> },
}

/// Classify a processing response.
///
/// One uploaded file yields the image itself; several yield a ZIP that is
/// unpacked into one entry per contained file.
///
/// # Errors
///
/// Returns an [`ArchiveError`] when a multi-file response is not a valid ZIP.
pub fn interpret_response(
    file_count: usize,
    format: OutputFormat,
    response: ProcessedResponse,
) -> Result<ProcessOutcome, ArchiveError> {
    let ProcessedResponse { bytes, content_disposition, content_type } = response;

    if file_count == 1 {
        let name = single_result_filename(content_disposition.as_deref(), format);
        let mime = content_type
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or_else(|| format.mime().to_owned());
        return Ok(ProcessOutcome::Single(SingleResult { name, mime, bytes: bytes.into() }));
    }

    let entries = archive::unpack(&bytes)?;
    Ok(ProcessOutcome::Batch { archive: bytes, entries })
}

/// Coarse view of the workflow for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
    Failed,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub files: Vec<SelectedFile>,
    pub options: ProcessingOptions,
    pub busy: bool,
    pub error: Option<String>,
    pub results: Vec<ResultItem>,
    pub archive: Option<ArchiveResult>,
    pub single: Option<SingleResult>,
    urls: ObjectUrls,
}

impl DashboardState {
    pub fn can_process(&self) -> bool {
        !self.files.is_empty() && !self.busy
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::Busy
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.single.is_some() || self.archive.is_some() {
            Phase::Done
        } else {
            Phase::Idle
        }
    }

    pub fn process_label(&self) -> &'static str {
        if self.busy { "Processing..." } else { "Process Images" }
    }

    /// Object URLs currently held by results and the archive link.
    pub fn live_urls(&self) -> &[String] {
        self.urls.live()
    }

    /// Replace the selection. Results of earlier runs stay visible.
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    /// Enter the busy state, clearing any previous error and results.
    ///
    /// Returns `false` (and changes nothing) when a run cannot start.
    pub fn begin_run(&mut self) -> bool {
        if !self.can_process() {
            return false;
        }
        self.error = None;
        self.clear_results();
        self.busy = true;
        true
    }

    /// Store a successful outcome. For a single result the returned value is
    /// what the caller should download immediately.
    pub fn complete_run(&mut self, outcome: ProcessOutcome) -> Option<SingleResult> {
        self.busy = false;
        match outcome {
            ProcessOutcome::Single(single) => {
                self.single = Some(single.clone());
                Some(single)
            }
            ProcessOutcome::Batch { archive, entries } => {
                self.archive = self
                    .urls
                    .create(&archive, "application/zip")
                    .map(|url| ArchiveResult { url, bytes: archive.into() });
                self.results = entries
                    .into_iter()
                    .filter_map(|entry| {
                        let mime = entry.mime().to_owned();
                        let url = self.urls.create(&entry.bytes, &mime)?;
                        Some(ResultItem { name: entry.name, url, mime, bytes: entry.bytes.into() })
                    })
                    .collect();
                None
            }
        }
    }

    /// Leave the busy state with a user-facing error.
    pub fn fail_run(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    /// Drop all results and revoke every object URL they used.
    pub fn clear_results(&mut self) {
        self.urls.revoke_all();
        self.results.clear();
        self.archive = None;
        self.single = None;
    }
}
