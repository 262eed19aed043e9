//! Client-side unpacking of batch ZIP responses.
//!
//! SYSTEM CONTEXT
//! ==============
//! For multi-file uploads the backend answers with one ZIP containing every
//! processed image. The dashboard unpacks it in memory so each image gets its
//! own preview and link, while the original archive stays downloadable.

#[cfg(test)]
#[path = "archive_test.rs"]
mod archive_test;

use std::io::{Cursor, Read};

/// Filename offered for the batch archive download.
pub const ARCHIVE_FILENAME: &str = "processed_images.zip";

/// One file extracted from an archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry inside the archive.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn mime(&self) -> &'static str {
        mime_for_name(&self.name)
    }
}

/// A malformed archive response.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("invalid archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to read archive entry `{name}`: {source}")]
    Entry {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Extract every file entry from `bytes`, in archive order.
///
/// Directory entries are skipped.
///
/// # Errors
///
/// Returns an [`ArchiveError`] if `bytes` is not a readable ZIP archive or an
/// entry cannot be decompressed.
pub fn unpack(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_owned();
        // Header sizes are untrusted; cap the capacity hint at the archive length.
        let hint = usize::try_from(file.size()).unwrap_or_default().min(bytes.len());
        let mut buf = Vec::with_capacity(hint);
        file.read_to_end(&mut buf)
            .map_err(|source| ArchiveError::Entry { name: name.clone(), source })?;
        entries.push(ArchiveEntry { name, bytes: buf });
    }

    Ok(entries)
}

/// Best-effort MIME type from a file name's extension.
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}
