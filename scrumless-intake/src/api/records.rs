//! Read-only listings of the bot-written voice tables
//!
//! The external Discord bot writes `transcriptions` and `voice_sessions`
//! directly to the Record Store; these handlers only list them, newest
//! first. No filtering, paging, or mutation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use scrumless_common::store::models::{
    TranscriptionRow, VoiceSessionRow, CREATED_AT_COLUMN, TRANSCRIPTIONS_TABLE,
    VOICE_SESSIONS_TABLE,
};

use crate::AppState;

/// GET /api/transcriptions
pub async fn list_transcriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TranscriptionRow>>, RecordsError> {
    let rows = state
        .store
        .list_desc(TRANSCRIPTIONS_TABLE, CREATED_AT_COLUMN)
        .await?;
    Ok(Json(rows))
}

/// GET /api/voice-sessions
pub async fn list_voice_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<VoiceSessionRow>>, RecordsError> {
    let rows = state
        .store
        .list_desc(VOICE_SESSIONS_TABLE, CREATED_AT_COLUMN)
        .await?;
    Ok(Json(rows))
}

/// Listing errors surface the store detail with a 500
#[derive(Debug)]
pub struct RecordsError(scrumless_common::Error);

impl From<scrumless_common::Error> for RecordsError {
    fn from(err: scrumless_common::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        error!("Error listing records: {}", self.0);

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
