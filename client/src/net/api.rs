//! REST API helpers for the chat and file-parsing endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Both calls resolve to `Result<_, String>` where the error is the text shown
//! in the error banner. Gateway error bodies pass their message through;
//! transport failures and unreadable bodies collapse to a fixed fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use protocol::{CHAT_PATH, ChatRequest, FILE_FIELD, PARSE_FILE_PATH};
#[cfg(any(test, feature = "csr"))]
use protocol::{ChatReply, Outcome, ParsedFile};
#[cfg(any(test, feature = "csr"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "csr"))]
use crate::state::chat::{PARSE_FALLBACK, REPLY_FALLBACK};

pub const UPLOAD_FALLBACK: &str = "Failed to upload file";
pub const SEND_FALLBACK: &str = "Failed to send message";

/// Decode a gateway body that is either the success shape or `{success:false, error}`.
#[cfg(any(test, feature = "csr"))]
fn decode_outcome<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, String> {
    serde_json::from_str::<Outcome<T>>(body)
        .map_err(|_| fallback.to_owned())?
        .into_result(fallback)
}

#[cfg(any(test, feature = "csr"))]
fn decode_parsed_file(body: &str) -> Result<ParsedFile, String> {
    decode_outcome(body, PARSE_FALLBACK)
}

#[cfg(any(test, feature = "csr"))]
fn decode_chat_reply(body: &str) -> Result<ChatReply, String> {
    decode_outcome(body, REPLY_FALLBACK)
}

/// Upload one file to `POST /api/parse-file` as multipart form data.
///
/// # Errors
///
/// Returns the gateway's error message, or [`UPLOAD_FALLBACK`] when the
/// request never completes.
#[cfg(feature = "csr")]
pub async fn parse_file(file: web_sys::File) -> Result<ParsedFile, String> {
    let transport = |e: String| {
        log::warn!("parse-file request failed: {e}");
        UPLOAD_FALLBACK.to_owned()
    };

    let form = web_sys::FormData::new().map_err(|e| transport(format!("{e:?}")))?;
    form.append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
        .map_err(|e| transport(format!("{e:?}")))?;

    let resp = gloo_net::http::Request::post(PARSE_FILE_PATH)
        .body(form)
        .map_err(|e| transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| transport(e.to_string()))?;
    let body = resp.text().await.map_err(|e| transport(e.to_string()))?;
    decode_parsed_file(&body)
}

/// Post the conversation to `POST /api/chat` and return the reply text.
///
/// # Errors
///
/// Returns the gateway's error message, or [`SEND_FALLBACK`] when the
/// request never completes.
#[cfg(feature = "csr")]
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, String> {
    let transport = |e: gloo_net::Error| {
        log::warn!("chat request failed: {e}");
        SEND_FALLBACK.to_owned()
    };

    let resp = gloo_net::http::Request::post(CHAT_PATH)
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body = resp.text().await.map_err(transport)?;
    decode_chat_reply(&body)
}
