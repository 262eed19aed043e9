use super::*;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

#[test]
fn encode_builds_base64_data_url() {
    assert_eq!(encode(b"hi", "image/png"), "data:image/png;base64,aGk=");
}

#[test]
fn decode_reverses_encode() {
    let url = encode(PNG_MAGIC, "image/png");
    let decoded = decode(&url).unwrap();
    assert_eq!(decoded, DataUrl { mime: "image/png".to_owned(), bytes: PNG_MAGIC.to_vec() });
}

#[test]
fn decode_bare_base64_sniffs_mime() {
    let bare = STANDARD.encode([0xff, 0xd8, 0xff, 0xe0, 0, 0x10]);
    let decoded = decode(&bare).unwrap();
    assert_eq!(decoded.mime, "image/jpeg");
    assert_eq!(decoded.bytes.len(), 6);
}

#[test]
fn decode_ignores_whitespace_and_line_breaks() {
    let decoded = decode("  data:image/gif;base64,R0lG\nODlh \n").unwrap();
    assert_eq!(decoded.mime, "image/gif");
    assert_eq!(decoded.bytes, b"GIF89a");
}

#[test]
fn decode_rejects_blank_and_non_base64_input() {
    assert!(matches!(decode("   "), Err(DataUrlError::Empty)));
    assert!(matches!(decode("data:image/png;base64,"), Err(DataUrlError::Empty)));
    assert!(matches!(decode("data:text/plain,hello"), Err(DataUrlError::NotBase64)));
    assert!(matches!(decode("data:image/png;base64"), Err(DataUrlError::NotBase64)));
    assert!(matches!(decode("not base64 at all!"), Err(DataUrlError::InvalidBase64(_))));
}

#[test]
fn decode_missing_mime_falls_back_to_sniffing() {
    let url = format!("data:;base64,{}", STANDARD.encode(PNG_MAGIC));
    assert_eq!(decode(&url).unwrap().mime, "image/png");
}

#[test]
fn sniff_mime_recognizes_common_formats() {
    assert_eq!(sniff_mime(PNG_MAGIC), "image/png");
    assert_eq!(sniff_mime(b"RIFF\x10\0\0\0WEBPVP8 "), "image/webp");
    assert_eq!(sniff_mime(b"GIF87a..."), "image/gif");
    assert_eq!(sniff_mime(b"PK\x03\x04"), "application/octet-stream");
    assert_eq!(sniff_mime(b""), "application/octet-stream");
}

#[test]
fn scaled_size_fits_longest_edge_without_upscaling() {
    assert_eq!(scaled_size(4000, 2000, Some(200)), (200, 100));
    assert_eq!(scaled_size(1000, 3000, Some(300)), (100, 300));
    assert_eq!(scaled_size(100, 50, Some(200)), (100, 50));
    assert_eq!(scaled_size(640, 480, None), (640, 480));
    assert_eq!(scaled_size(5000, 1, Some(100)), (100, 1));
}

