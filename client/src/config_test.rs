use super::*;

#[test]
fn normalize_base_url_trims_and_drops_trailing_slash() {
    assert_eq!(normalize_base_url("  https://api.example.com/  "), "https://api.example.com");
    assert_eq!(normalize_base_url("https://api.example.com"), "https://api.example.com");
}

#[test]
fn resolve_api_root_defaults_to_localhost() {
    assert_eq!(resolve_api_root(None, false), Ok("http://localhost:5000/api".to_owned()));
    assert_eq!(resolve_api_root(Some("   "), false), Ok("http://localhost:5000/api".to_owned()));
}

#[test]
fn resolve_api_root_appends_api_segment() {
    assert_eq!(
        resolve_api_root(Some("https://img.example.com/"), false),
        Ok("https://img.example.com/api".to_owned())
    );
}

#[test]
fn resolve_api_root_rejects_plain_http_in_production() {
    assert_eq!(
        resolve_api_root(Some("http://img.example.com"), true),
        Err(ConfigError::InsecureBaseUrl("http://img.example.com".to_owned()))
    );
}

#[test]
fn resolve_api_root_rejects_default_in_production() {
    assert!(resolve_api_root(None, true).is_err());
}

#[test]
fn resolve_api_root_accepts_https_in_production() {
    assert_eq!(
        resolve_api_root(Some("HTTPS://img.example.com"), true),
        Ok("HTTPS://img.example.com/api".to_owned())
    );
}

