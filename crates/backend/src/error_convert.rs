use shared_types::AppError;

/// Convert a transport-level `reqwest::Error` into an AppError.
///
/// Anything that never produced a usable response is a network failure;
/// a body that could not be decoded is an invalid response.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        tracing::error!(error = %err, "Undecodable response body");
        return AppError::invalid_response();
    }
    if let Some(status) = err.status() {
        return AppError::from_status(status.as_u16(), err.to_string());
    }
    tracing::error!(error = %err, "Request failed before a response arrived");
    AppError::network()
}

/// Build an AppError from a non-2xx response.
///
/// Uses the server's `error`/`message` field when present, otherwise
/// `fallback`.
pub async fn response_to_app_error(response: reqwest::Response, fallback: &str) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = AppError::message_from_body(&body).unwrap_or_else(|| fallback.to_string());
    tracing::error!(status, message = %message, "Backend returned an error");
    AppError::from_status(status, message)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Trait for validating request DTOs before they are sent.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
