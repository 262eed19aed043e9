//! Wire DTOs for the auth and processing endpoints.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator, so deserialization is lenient
//! where its payloads are loosely typed (numeric vs. string ids).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier, normalised to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Login email.
    pub email: String,
}

/// Envelope returned by `signup`, `login`, and `me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
}

/// Credentials posted to `signup` and `login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Error body shape used by the backend (`{ "message": "..." }`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw response of `POST /api/images/process`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessedResponse {
    /// Response body: a single image or a ZIP archive.
    pub bytes: Vec<u8>,
    /// `Content-Disposition` header, when exposed by CORS.
    pub content_disposition: Option<String>,
    /// `Content-Type` header, when present.
    pub content_type: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
