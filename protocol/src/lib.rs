//! Shared JSON wire model for the chat and file-parsing endpoints.
//!
//! This crate owns the request/response bodies used by both `server` and
//! `client`. Field names are camelCase on the wire to match the browser
//! bundle's expectations.

use serde::{Deserialize, Serialize};

/// Path of the chat completion endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Path of the file extraction endpoint.
pub const PARSE_FILE_PATH: &str = "/api/parse-file";

/// Multipart field name carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Upload extensions the client offers in its file picker.
pub const ACCEPTED_EXTENSIONS: [&str; 8] = ["txt", "md", "csv", "json", "docx", "xlsx", "xls", "pdf"];

/// Author of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation as sent to the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    /// Extracted text of the attached document, if any.
    #[serde(default)]
    pub file_content: Option<String>,
}

/// Token accounting passed through from the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Successful body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Successful body of `POST /api/parse-file`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    pub success: bool,
    pub file_name: String,
    /// Content type declared by the uploader (may be empty).
    pub file_type: String,
    pub file_size: u64,
    pub content: String,
    /// Character count of `content`.
    pub content_length: usize,
}

/// Failure body shared by both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

/// Either shape a gateway endpoint can return. Used by the client, which
/// must inspect `success` before knowing which body it holds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Ok(T),
    Err(ErrorBody),
}

impl<T> Outcome<T> {
    /// Collapse into a `Result`, substituting `fallback` when the error body
    /// carries an empty message.
    ///
    /// # Errors
    ///
    /// Returns the server's error string when the body is an [`ErrorBody`].
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(body) if body.error.trim().is_empty() => Err(fallback.to_owned()),
            Self::Err(body) => Err(body.error),
        }
    }
}

/// File picker `accept` value, e.g. `".txt,.md,..."`.
#[must_use]
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.map(|ext| format!(".{ext}")).join(",")
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
