//! HTTP-facing error type shared by the gateway routes.
//!
//! Every failure leaves the server as `{"success": false, "error": "..."}`
//! with a mapped status code. Internal detail is logged before conversion.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use protocol::ErrorBody;

use crate::llm::types::LlmError;
use crate::services::extract::ExtractError;

pub const CHAT_FALLBACK: &str = "Failed to get AI response";
pub const PARSE_FALLBACK: &str = "Failed to parse file";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request body or unsupported upload.
    #[error("{0}")]
    BadRequest(String),

    /// Upload exceeded the configured body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Provider rejected the credential.
    #[error("Invalid API key. Please check your API key.")]
    Unauthorized,

    /// Provider throttled the request.
    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    /// The server started without a provider credential.
    #[error("LLM not configured")]
    LlmNotConfigured,

    /// Any other provider failure; carries the provider's message.
    #[error("{0}")]
    Upstream(String),

    /// Extraction or other server-side failure; message is shown to the user.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err.status() {
            Some(401) => Self::Unauthorized,
            Some(429) => Self::RateLimited,
            _ => Self::Upstream(err.provider_message().unwrap_or_else(|| CHAT_FALLBACK.to_owned())),
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Unsupported => Self::BadRequest(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
