use super::*;

#[test]
fn filename_from_quoted_attachment_header() {
    assert_eq!(
        filename_from_content_disposition(r#"attachment; filename="holiday.webp""#),
        Some("holiday.webp".to_owned())
    );
}

#[test]
fn filename_from_bare_value_with_trailing_params() {
    assert_eq!(
        filename_from_content_disposition("attachment; filename=photo.jpg; size=1234"),
        Some("photo.jpg".to_owned())
    );
}

#[test]
fn filename_parameter_is_case_insensitive_and_space_tolerant() {
    assert_eq!(
        filename_from_content_disposition(r#"ATTACHMENT; FileName = "Scan 01.png" "#),
        Some("Scan 01.png".to_owned())
    );
}

#[test]
fn filename_star_parameter_is_skipped_for_plain_one() {
    assert_eq!(
        filename_from_content_disposition(r#"attachment; filename*=UTF-8''x%20y.jpg; filename="x y.jpg""#),
        Some("x y.jpg".to_owned())
    );
}

#[test]
fn missing_or_blank_filename_is_none() {
    assert_eq!(filename_from_content_disposition(""), None);
    assert_eq!(filename_from_content_disposition("inline"), None);
    assert_eq!(filename_from_content_disposition(r#"attachment; filename="   ""#), None);
}

#[test]
fn fallback_filename_uses_format_extension() {
    assert_eq!(fallback_filename(OutputFormat::Jpeg), "processed-image.jpg");
    assert_eq!(fallback_filename(OutputFormat::Png), "processed-image.png");
    assert_eq!(fallback_filename(OutputFormat::Webp), "processed-image.webp");
}

#[test]
fn single_result_filename_prefers_header() {
    assert_eq!(
        single_result_filename(Some(r#"attachment; filename="out.png""#), OutputFormat::Jpeg),
        "out.png"
    );
    assert_eq!(single_result_filename(None, OutputFormat::Webp), "processed-image.webp");
    assert_eq!(single_result_filename(Some("attachment"), OutputFormat::Jpeg), "processed-image.jpg");
}

#[test]
fn trigger_download_is_noop_outside_browser() {
    trigger_download(b"bytes", "image/png", "x.png");
}
