use std::io::Write;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use super::*;

fn build_zip(files: &[(&str, &[u8])], dirs: &[&str]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for dir in dirs {
        writer.add_directory(*dir, options).unwrap();
    }
    for (name, bytes) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn unpack_returns_one_entry_per_file() {
    let zip = build_zip(&[("a.jpg", b"AAAA"), ("b.jpg", b"BB"), ("c.png", b"C")], &[]);
    let entries = unpack(&zip).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.jpg", "c.png"]);
    assert_eq!(entries[0].bytes, b"AAAA");
    assert_eq!(entries[2].bytes, b"C");
}

#[test]
fn unpack_skips_directory_entries() {
    let zip = build_zip(&[("out/one.webp", b"1")], &["out/"]);
    let entries = unpack(&zip).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "out/one.webp");
}

#[test]
fn unpack_empty_archive_yields_nothing() {
    let zip = build_zip(&[], &[]);
    assert!(unpack(&zip).unwrap().is_empty());
}

#[test]
fn unpack_rejects_non_zip_bytes() {
    let err = unpack(b"\xff\xd8\xff\xe0 definitely a jpeg").unwrap_err();
    assert!(matches!(err, ArchiveError::Zip(_)));
    assert!(err.to_string().starts_with("invalid archive"));
}

fn patch_u32(zip: &mut [u8], at: usize, value: u32) {
    zip[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn unpack_survives_overstated_entry_size() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("big.jpg", options).unwrap();
    writer.write_all(b"hello").unwrap();
    let mut zip = writer.finish().unwrap().into_inner();

    // Uncompressed size lives at offset 22 of the local header and 24 of the
    // central directory record.
    patch_u32(&mut zip, 22, 0xF000_0000);
    let central = zip.windows(4).position(|w| w == b"PK\x01\x02").unwrap();
    patch_u32(&mut zip, central + 24, 0xF000_0000);

    // Either outcome is fine as long as no allocation follows the header.
    match unpack(&zip) {
        Ok(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].bytes, b"hello");
            assert!(entries[0].bytes.capacity() <= zip.len());
        }
        Err(err) => assert!(!err.to_string().is_empty()),
    }
}

#[test]
fn mime_for_name_maps_image_extensions() {
    assert_eq!(mime_for_name("photo.JPG"), "image/jpeg");
    assert_eq!(mime_for_name("a.b.jpeg"), "image/jpeg");
    assert_eq!(mime_for_name("x.png"), "image/png");
    assert_eq!(mime_for_name("x.webp"), "image/webp");
    assert_eq!(mime_for_name("README"), "application/octet-stream");
}

#[test]
fn entry_mime_uses_its_name() {
    let entry = ArchiveEntry { name: "x.png".to_owned(), bytes: vec![] };
    assert_eq!(entry.mime(), "image/png");
}
