use super::*;

#[test]
fn validate_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials("  ada@example.com ", " correct horse "),
        Ok(Credentials { email: "ada@example.com".to_owned(), password: " correct horse ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "longenough"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("   ", "longenough"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("ada@example.com", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_credentials_rejects_short_passwords() {
    assert_eq!(validate_credentials("ada@example.com", "1234567"), Err(SHORT_PASSWORD_MESSAGE));
    assert!(validate_credentials("ada@example.com", "12345678").is_ok());
}

#[test]
fn validate_credentials_counts_characters_not_bytes() {
    assert_eq!(validate_credentials("ada@example.com", "ééééééé"), Err(SHORT_PASSWORD_MESSAGE));
    assert!(validate_credentials("ada@example.com", "éééééééé").is_ok());
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User { id: "u1".to_owned(), email: "ada@example.com".to_owned() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
