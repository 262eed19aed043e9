#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn create_tracks_unique_urls() {
    let mut urls = ObjectUrls::new();
    let a = urls.create(b"one", "image/png").unwrap();
    let b = urls.create(b"two", "image/png").unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with("blob:"));
    assert_eq!(urls.live(), &[a, b]);
}

#[test]
fn revoke_all_releases_every_url() {
    let mut urls = ObjectUrls::new();
    for i in 0..3u8 {
        urls.create(&[i], "image/jpeg");
    }
    assert_eq!(urls.revoke_all(), 3);
    assert!(urls.is_empty());
    assert_eq!(urls.revoke_all(), 0);
}

#[test]
fn revoke_single_url() {
    let mut urls = ObjectUrls::new();
    let keep = urls.create(b"keep", "image/png").unwrap();
    let drop = urls.create(b"drop", "image/png").unwrap();
    assert!(urls.revoke(&drop));
    assert!(!urls.revoke(&drop));
    assert_eq!(urls.live(), &[keep]);
}

#[test]
fn untracked_mint_is_not_registered() {
    let urls = ObjectUrls::new();
    let url = mint(b"x", "image/png").unwrap();
    release(&url);
    assert!(urls.is_empty());
}
