use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::SamplerError;
use crate::domain::{AUDIO_MIME, DownloadRequest, ProcessedAudio};
use crate::presentation::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn audio_response(audio: ProcessedAudio) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", audio.filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, AUDIO_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        audio.bytes,
    )
        .into_response()
}

/// Client-facing status and message. Details stay in the logs.
fn status_for(error: &SamplerError) -> (StatusCode, String) {
    match error {
        SamplerError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        SamplerError::Workspace(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error creating temp dir".to_string(),
        ),
        SamplerError::Download(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error downloading audio".to_string(),
        ),
        SamplerError::FileTooLarge { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "Downloaded audio exceeds maximum file size".to_string(),
        ),
        SamplerError::Relay(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error processing audio".to_string(),
        ),
        SamplerError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn download_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Error decoding request");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match state.sampler_service.spawn_process(request).await {
        Ok(audio) => {
            tracing::info!(filename = %audio.filename, bytes = audio.len(), "Sending processed audio");
            audio_response(audio)
        }
        Err(e) => {
            let (status, message) = status_for(&e);
            if status.is_client_error() {
                tracing::warn!(error = %e, "Rejected download request");
            } else {
                tracing::error!(error = %e, "Download request failed");
            }
            error_response(status, message)
        }
    }
}

pub async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
