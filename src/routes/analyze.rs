use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{AnalyzeImageRequest, AnalyzeImageResponse},
    services::image_analysis::ImagePayload,
    state::AppState,
};

/// Handler for the image analysis endpoint
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeImageRequest>, JsonRejection>,
) -> AppResult<Json<AnalyzeImageResponse>> {
    let Json(request) = payload?;
    let image = ImagePayload::parse(request.image.as_deref().unwrap_or_default())?;

    tracing::info!(
        request_id = %request_id,
        image_bytes = image.size(),
        classifier = state.image_classifier.name(),
        "Processing image analysis request"
    );

    let detected_styles = state
        .image_classifier
        .classify(&image, state.model.styles().as_slice())
        .await
        .ok_or_else(|| {
            AppError::ExternalService("image classifier returned no result".to_string())
        })?;

    for detected in &detected_styles {
        tracing::info!(
            request_id = %request_id,
            style = %detected.style,
            confidence = detected.confidence,
            "Style detected"
        );
    }

    Ok(Json(AnalyzeImageResponse {
        success: true,
        detected_styles,
    }))
}
