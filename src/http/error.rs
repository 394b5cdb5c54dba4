use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dictionary::Envelope;
use crate::error::DictionaryError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    MalformedPayload { message: String, request_count: u64 },

    #[error("Dictionary unavailable: {source}")]
    Unavailable {
        #[source]
        source: DictionaryError,
        request_count: u64,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, request_count) = match &self {
            ApiError::MalformedPayload { request_count, .. } => {
                (StatusCode::BAD_REQUEST, *request_count)
            }
            ApiError::Unavailable { request_count, .. } => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, *request_count)
            }
        };

        (status, Json(Envelope::error(request_count, self.to_string()))).into_response()
    }
}
