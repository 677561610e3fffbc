use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-visible errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    /// No response was received (connection refused, DNS, timeout).
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error returned by every backend call.
///
/// Screens only ever display `message`; the kind is kept for logging and
/// for tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Message shown when the server could not be reached at all.
pub const CONNECTION_FAILED: &str = "Unable to connect to server. Please check your connection.";

/// Message shown when a response body does not have the expected shape.
pub const INVALID_RESPONSE: &str = "Invalid response received from server";

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::RateLimited, message)
    }

    pub fn network() -> Self {
        Self::with_kind(AppErrorKind::Network, CONNECTION_FAILED)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    pub fn invalid_response() -> Self {
        Self::internal(INVALID_RESPONSE)
    }

    /// Build an error from an HTTP status code and a display message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        };
        Self::with_kind(kind, message)
    }

    /// Pull a human-readable message out of a backend error body.
    ///
    /// The backend answers failures with `{"error": "..."}`; some paths use
    /// `{"message": "..."}` instead. Returns `None` for anything else.
    pub fn message_from_body(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["error", "message"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|msg| !msg.is_empty())
            .map(str::to_string)
    }

    /// Whether the error came from the transport rather than the server.
    pub fn is_network(&self) -> bool {
        self.kind == AppErrorKind::Network
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        // Surface one concrete message; screens show only `message`.
        let mut fields: Vec<_> = field_errors.keys().cloned().collect();
        fields.sort();
        let message = fields
            .first()
            .and_then(|f| field_errors.get(f))
            .cloned()
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::validation(message, field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_body_prefers_error_field() {
        let body = r#"{"error":"Invalid credentials","message":"ignored"}"#;
        assert_eq!(
            AppError::message_from_body(body).as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn message_from_body_falls_back_to_message_field() {
        let body = r#"{"message":"User not found: bob"}"#;
        assert_eq!(
            AppError::message_from_body(body).as_deref(),
            Some("User not found: bob")
        );
    }

    #[test]
    fn message_from_body_ignores_blank_and_garbage() {
        assert!(AppError::message_from_body(r#"{"error":"  "}"#).is_none());
        assert!(AppError::message_from_body("<html>502</html>").is_none());
        assert!(AppError::message_from_body("").is_none());
    }

    #[test]
    fn from_status_maps_kinds() {
        assert_eq!(AppError::from_status(401, "x").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(404, "x").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(400, "x").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(429, "x").kind, AppErrorKind::RateLimited);
        assert_eq!(AppError::from_status(500, "x").kind, AppErrorKind::InternalError);
        assert_eq!(AppError::from_status(503, "x").kind, AppErrorKind::InternalError);
    }

    #[test]
    fn network_error_uses_connection_message() {
        let err = AppError::network();
        assert!(err.is_network());
        assert_eq!(err.message, CONNECTION_FAILED);
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("email").unwrap(), "invalid format");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }
}
