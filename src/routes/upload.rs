use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::extract::{self, DOCX_EXTENSION};
use crate::models::{AppError, AppResult, AppState, ResponseEnvelope, UploadedFile};
use crate::prompt;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/uploadfile/", post(upload_file))
        .with_state(state)
}

/// Accepts one multipart upload and returns the summary in a response
/// envelope. Failures are signaled in the envelope body, always with
/// transport status 200.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<ResponseEnvelope> {
    let upload = match read_file_field(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return Json(ResponseEnvelope::fail("Missing `file` form field"));
        }
        Err(msg) => {
            warn!(%msg, "rejecting malformed multipart body");
            return Json(ResponseEnvelope::fail(msg));
        }
    };

    info!(filename = %upload.filename, size = upload.content.len(), "processing upload");

    match summarize_upload(&state, &upload).await {
        Ok(summary) => Json(ResponseEnvelope::success(summary)),
        Err(err) => {
            warn!(filename = %upload.filename, error = %err, "upload failed");
            Json(ResponseEnvelope::from(err))
        }
    }
}

/// The pipeline proper: extension check, then extraction, then prompt
/// construction, then the remote call. The first failing step
/// short-circuits.
async fn summarize_upload(state: &AppState, upload: &UploadedFile) -> AppResult<String> {
    if !extract::is_docx_filename(&upload.filename) {
        return Err(AppError::Validation(format!(
            "Only {DOCX_EXTENSION} files now. Other file type will come soon!"
        )));
    }

    let text = extract::extract_text(&upload.content)?;
    let prompt = prompt::build_prompt(&text);

    state.summarizer.summarize(&prompt).await
}

async fn read_file_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Invalid multipart body: {e}"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| format!("Failed to read upload: {e}"))?;

        return Ok(Some(UploadedFile { filename, content }));
    }

    Ok(None)
}
