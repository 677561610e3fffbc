use crate::error::AppError;
use crate::user::{Role, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Local storage key holding the opaque token.
pub const TOKEN_KEY: &str = "token";

/// Local storage key holding the serialized [`User`].
pub const USER_KEY: &str = "user";

/// Signed-in state persisted in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Message shown when the login form is submitted with a blank field.
pub const MISSING_CREDENTIALS: &str = "Please enter both username and password";

impl LoginRequest {
    /// Build a request from form input, rejecting blank fields.
    ///
    /// The username is sent as typed (no trimming), matching what the
    /// backend stores.
    pub fn from_form(username: &str, password: &str) -> Result<Self, AppError> {
        let mut fields = HashMap::new();
        if username.trim().is_empty() {
            fields.insert("username".to_string(), "Username is required".to_string());
        }
        if password.trim().is_empty() {
            fields.insert("password".to_string(), "Password is required".to_string());
        }
        if !fields.is_empty() {
            return Err(AppError::validation(MISSING_CREDENTIALS, fields));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Response of `POST /api/auth/login`.
///
/// Both fields are optional on the wire; a session is only established
/// when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Convert into a session if the response carries a user and a non-empty token.
    pub fn into_session(self) -> Result<Session, AppError> {
        match (self.user, self.token) {
            (Some(user), Some(token)) if !token.is_empty() => Ok(Session { token, user }),
            _ => Err(AppError::invalid_response()),
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    pub role: Role,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Department is required"))
    )]
    pub department: String,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::User,
            department: "Engineering".to_string(),
        }
    }
}
