use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, AppState};
use crate::dictionary::{Envelope, OutcomeKind};
use crate::error::DictionaryError;

/// Body accepted by `POST /api/definitions`.
#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

impl StoreRequest {
    /// Parses a store body. Only a JSON object is accepted; the derived
    /// deserializer would also take `["word", "definition"]` positionally.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {other}"
            ))),
        }
    }
}

fn status_for(kind: OutcomeKind) -> StatusCode {
    match kind {
        OutcomeKind::Success | OutcomeKind::Warning => StatusCode::OK,
        OutcomeKind::BadRequest => StatusCode::BAD_REQUEST,
    }
}

fn unavailable(state: &AppState, source: DictionaryError) -> ApiError {
    ApiError::Unavailable {
        source,
        request_count: state.service.request_count(),
    }
}

/// `GET /api/definitions`: usage page without a query, lookup otherwise.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    if params.is_empty() {
        return Ok(Html(state.messages.usage.clone()).into_response());
    }

    // Other parameters without `word` still count as a search for "".
    let word = params.get("word").cloned().unwrap_or_default();
    let outcome = state
        .service
        .search(word)
        .await
        .map_err(|e| unavailable(&state, e))?;

    let status = status_for(outcome.kind());
    Ok((status, Json(Envelope::from(outcome))).into_response())
}

/// `POST /api/definitions`: insert a word.
///
/// A body that is not a JSON object of strings is rejected before the
/// dictionary sees it, so it does not advance the request counter.
pub async fn store(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request = StoreRequest::from_body(&body).map_err(|e| {
        debug!("Rejected store body: {e}");
        ApiError::MalformedPayload {
            message: state.messages.invalid_json.clone(),
            request_count: state.service.request_count(),
        }
    })?;

    let outcome = state
        .service
        .store(
            request.word.unwrap_or_default(),
            request.definition.unwrap_or_default(),
        )
        .await
        .map_err(|e| unavailable(&state, e))?;

    let status = status_for(outcome.kind());
    Ok((status, Json(Envelope::from(outcome))).into_response())
}

/// `OPTIONS /api/definitions`: CORS preflight. The headers come from the
/// router's response layers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Unknown paths and unsupported methods.
pub async fn not_found(State(state): State<AppState>) -> Response {
    let envelope = Envelope::error(state.service.request_count(), state.messages.not_found.clone());
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}
