// src/risk_api/lib.rs
#![deny(unsafe_code)]

pub mod serverless;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use risk_core::{AdapterError, ScoreResponse};
use serde::Serialize;
use serverless::ServerlessResponse;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Echo raw request bodies into the log before decoding
    pub log_request_bodies: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ApiState {
    pub config: ApiConfig,
}

impl ApiState {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn log_body(&self, route: &str, body: &[u8]) {
        if self.config.log_request_bodies {
            debug!(route, body = %String::from_utf8_lossy(body), "raw request body");
        }
    }
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/score", post(score))
        .route("/api/risk", post(risk))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Adapter(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ScoreResponse::error(self.to_string()))).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "risk-api",
    })
}

/// Route binding. The body is read raw so a missing field or bad JSON
/// comes back as `{"error": ...}` rather than axum's rejection text.
async fn score(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<ScoreResponse>, ApiError> {
    state.log_body("/api/score", &body);
    match risk_core::decode_profile(&body) {
        Ok(profile) => {
            let tier = profile.tier();
            info!(%tier, "scored borrower");
            Ok(Json(ScoreResponse::tier(tier)))
        }
        Err(err) => {
            warn!(error = %err, "rejected score request");
            Err(err.into())
        }
    }
}

/// Function-as-a-service binding; renders the serverless envelope.
async fn risk(State(state): State<ApiState>, body: Bytes) -> ServerlessResponse {
    state.log_body("/api/risk", &body);
    let response = serverless::invoke(&body);
    info!(status = response.status_code, "serverless invocation");
    response
}
