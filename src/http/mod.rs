//! HTTP surface of the dictionary.
//!
//! One path, `/api/definitions`, dispatched by method. Everything else,
//! including unsupported methods on that path and `OPTIONS` elsewhere, gets
//! the not-found envelope. CORS headers are attached to every response.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Request,
    },
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::Span;
use uuid::Uuid;

use crate::dictionary::{Messages, ServiceHandle};

pub use error::ApiError;

pub const DEFINITIONS_PATH: &str = "/api/definitions";

const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "POST, GET, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: ServiceHandle,
    pub messages: Arc<Messages>,
}

impl AppState {
    pub fn new(service: ServiceHandle, messages: Arc<Messages>) -> Self {
        Self { service, messages }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            DEFINITIONS_PATH,
            get(handlers::search)
                .post(handlers::store)
                .options(handlers::preflight)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static(ALLOWED_ORIGIN),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOWED_METHODS),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static(ALLOWED_HEADERS),
                )),
        )
        .with_state(state)
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %request.method(),
        uri = %request.uri(),
    )
}
