use super::*;

#[test]
fn accepts_mime_keeps_images_and_blank_types() {
    assert!(accepts_mime("image/png"));
    assert!(accepts_mime("image/heic"));
    assert!(accepts_mime(""));
}

#[test]
fn accepts_mime_rejects_other_types() {
    assert!(!accepts_mime("application/pdf"));
    assert!(!accepts_mime("text/plain"));
}

#[test]
fn selection_summary_pluralizes() {
    assert_eq!(selection_summary(0), "No images selected");
    assert_eq!(selection_summary(1), "1 image selected");
    assert_eq!(selection_summary(4), "4 images selected");
}
