//! Route handlers for generate, history and health.

use crate::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use log::debug;
use tagline_rs_core::TaglineService;
use tagline_rs_protocol::{GenerateRequest, GenerateResponse, HealthResponse, HistoryResponse};

/// `POST /generate` (and the legacy `POST /tagline`).
pub(crate) async fn generate(
    State(service): State<TaglineService>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;
    debug!(
        "generate request (tone={}, count={})",
        request.tone, request.count
    );
    let taglines = service.generate(request).await?;
    Ok(Json(GenerateResponse { taglines }))
}

/// `GET /history`
pub(crate) async fn history(
    State(service): State<TaglineService>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let history = service.history().await?;
    Ok(Json(HistoryResponse { history }))
}

/// `GET /health`
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
