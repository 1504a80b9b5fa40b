use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{PredictionRequest, PredictionResponse},
    services::{prediction, season::current_month},
    state::AppState,
};

/// Handler for the prediction endpoint
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        style = ?request.style,
        gender = ?request.gender,
        season = ?request.season,
        time = ?request.time,
        "Processing prediction request"
    );

    let response = prediction::predict(&state.lexicon, &state.model, &request, current_month())
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, error = %e, "Prediction rejected")
        })?;

    tracing::info!(
        request_id = %request_id,
        matched_style = %response.matched_style,
        "Prediction completed"
    );

    Ok(Json(response))
}
