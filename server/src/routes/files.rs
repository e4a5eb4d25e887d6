//! File extraction route.

use axum::Json;
use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use tracing::info;

use protocol::{FILE_FIELD, ParsedFile};

use crate::error::{ApiError, PARSE_FALLBACK};
use crate::services::extract;

struct Upload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// `POST /api/parse-file`: extract plain text from one uploaded document.
pub async fn parse_file(multipart: Result<Multipart, MultipartRejection>) -> Result<Json<ParsedFile>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let upload = read_upload(&mut multipart)
        .await?
        .ok_or_else(|| ApiError::BadRequest("No file provided".into()))?;

    let Upload { file_name, content_type, bytes } = upload;
    let file_size = bytes.len() as u64;

    let name = file_name.clone();
    let content = tokio::task::spawn_blocking(move || extract::extract_file(&name, &bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("{PARSE_FALLBACK}: {e}")))??;
    let content_length = content.chars().count();

    info!(%file_name, %content_type, file_size, content_length, "parse-file: extracted");

    Ok(Json(ParsedFile {
        success: true,
        file_name,
        file_type: content_type,
        file_size,
        content,
        content_length,
    }))
}

/// Pull the `file` field out of the form. Other fields are ignored.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(Upload { file_name, content_type, bytes: bytes.to_vec() }));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod tests;
