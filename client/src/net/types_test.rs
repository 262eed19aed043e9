use super::*;

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id":"abc","email":"a@b.com"}"#).unwrap();
    assert_eq!(user, User { id: "abc".to_owned(), email: "a@b.com".to_owned() });
}

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_str(r#"{"id":42,"email":"a@b.com"}"#).unwrap();
    assert_eq!(user.id, "42");
}

#[test]
fn user_rejects_object_id() {
    let result = serde_json::from_str::<User>(r#"{"id":{"x":1},"email":"a@b.com"}"#);
    assert!(result.is_err());
}

#[test]
fn auth_response_unwraps_user_envelope() {
    let body: AuthResponse =
        serde_json::from_str(r#"{"user":{"id":"7","email":"me@example.com"},"extra":true}"#).unwrap();
    assert_eq!(body.user.email, "me@example.com");
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "me@example.com".to_owned(), password: "hunter22".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "email": "me@example.com", "password": "hunter22" })
    );
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
}
