//! HTTP routes and handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::state::AppState;
use bugtriage_core::{BugReport, Error};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/triage", post(triage))
        .route("/batch-triage", post(batch_triage))
        .route("/health", get(health))
        .route("/ai-status", get(ai_status))
        .route("/metrics", get(metrics))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API error with a client-safe message.
///
/// Validation problems carry their own message; anything else is logged
/// in full and reduced to a generic description on the wire.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if err.is_client_error() {
            Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            }
        } else {
            error!(error = %err, "request failed");
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "an unexpected error occurred while processing the bug report"
                    .to_string(),
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Body accepted by `/triage`: a single report, or a batch container
/// that delegates to the batch path.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TriageRequest {
    Batch { bugs: Vec<BugReport> },
    Single(BugReport),
}

async fn triage(
    State(state): State<AppState>,
    Json(request): Json<TriageRequest>,
) -> Result<Response, ApiError> {
    match request {
        TriageRequest::Batch { bugs } => {
            let summary = state.service.triage_batch(&bugs).await?;
            Ok(Json(summary).into_response())
        }
        TriageRequest::Single(report) => {
            let preview: String = report.title.chars().take(50).collect();
            info!(title = %preview, "processing triage request");
            let result = state.service.triage(&report).await?;
            Ok(Json(result).into_response())
        }
    }
}

#[derive(Debug, Deserialize)]
struct BatchTriageRequest {
    bugs: Option<Vec<BugReport>>,
}

async fn batch_triage(
    State(state): State<AppState>,
    Json(request): Json<BatchTriageRequest>,
) -> Result<Response, ApiError> {
    let bugs = request
        .bugs
        .ok_or_else(|| ApiError::bad_request("request must contain a \"bugs\" array"))?;

    let summary = state.service.triage_batch(&bugs).await?;
    Ok(Json(summary).into_response())
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "Bug Triage API",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_available": state.service.ai_available(),
    }))
}

async fn ai_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.status())
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => handle.render(),
        None => String::new(),
    }
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "endpoint not found" })),
    )
}
