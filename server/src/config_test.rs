use super::*;

fn configured() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

// =============================================================================
// resolve_site_addr
// =============================================================================

#[test]
fn resolve_site_addr_keeps_configured_without_overrides() {
    assert_eq!(resolve_site_addr(configured(), None, None).unwrap(), configured());
    assert_eq!(resolve_site_addr(configured(), Some("  "), Some("")).unwrap(), configured());
}

#[test]
fn resolve_site_addr_port_binds_all_interfaces() {
    let addr = resolve_site_addr(configured(), None, Some("8080")).unwrap();
    assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_site_addr_site_addr_wins_over_port() {
    let addr = resolve_site_addr(configured(), Some("10.0.0.5:4000"), Some("8080")).unwrap();
    assert_eq!(addr, "10.0.0.5:4000".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_site_addr_rejects_bad_port() {
    let err = resolve_site_addr(configured(), None, Some("http")).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort { ref value } if value == "http"));
    assert!(resolve_site_addr(configured(), None, Some("70000")).is_err());
}

#[test]
fn resolve_site_addr_rejects_bad_site_addr() {
    let err = resolve_site_addr(configured(), Some("localhost"), None).unwrap_err();
    assert!(matches!(err, HostError::InvalidSiteAddr { .. }));
}

// =============================================================================
// log_filter
// =============================================================================

#[test]
fn log_filter_prefers_rust_log() {
    assert_eq!(log_filter(Some("warn")), "warn");
}

#[test]
fn log_filter_defaults_when_unset_or_blank() {
    assert_eq!(log_filter(None), DEFAULT_LOG_FILTER);
    assert_eq!(log_filter(Some(" ")), DEFAULT_LOG_FILTER);
}

#[test]
fn host_error_messages_name_the_value() {
    let err = HostError::InvalidPort { value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT value \"abc\"");
}
