//! Request handlers

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::{debug, Instrument};
use uuid::Uuid;

use crate::note::{NoteRequest, NoteResponse};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::{APP_NAME, VERSION};

/// POST handler for note generation.
///
/// The body is parsed by hand so that a request without a JSON content type
/// still works, and so that malformed JSON is reported as a server error.
pub async fn generate_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<NoteResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_note", %request_id);

    handle_generate(state, body).instrument(span).await
}

async fn handle_generate(state: AppState, body: Bytes) -> Result<Json<NoteResponse>, ApiError> {
    let request = NoteRequest::from_json(&body)?;

    debug!(provider = state.service.provider_name(), "Note request received");

    let response = state.service.generate(&request).await?;
    Ok(Json(response))
}

/// Any other method on the note route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: APP_NAME,
        version: VERSION,
    })
}
