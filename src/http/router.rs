//! axum router — maps HTTP routes onto the endpoint handlers.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{self, HandlerResponse, Route};
use crate::types::{Config, HttpConfig, Result};
use crate::validation::ZipcodeRange;

/// Immutable per-process state shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub zipcodes: ZipcodeRange,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            zipcodes: config.validation.zipcode_range()?,
        })
    }
}

/// Build the service router with tracing, timeout and body-limit layers.
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route(Route::DropShip.path(), post(drop_ship))
        .route(Route::ValidateAddress.path(), post(validate_address))
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    trace_id = %uuid::Uuid::new_v4().simple(),
                )
            }),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout,
        ))
        .layer(RequestBodyLimitLayer::new(http.max_body_bytes))
        .with_state(Arc::new(state))
}

async fn drop_ship(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    into_response(handlers::handle(Route::DropShip, &body, &state.zipcodes))
}

async fn validate_address(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    into_response(handlers::handle(
        Route::ValidateAddress,
        &body,
        &state.zipcodes,
    ))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn into_response(resp: HandlerResponse) -> Response {
    (
        StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        resp.body,
    )
        .into_response()
}
