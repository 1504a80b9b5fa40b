use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    models::{AiFeatures, HealthResponse},
    state::AppState,
};

pub mod analyze;
pub mod predict;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/predict", post(predict::predict))
        .route("/analyze-image", post(analyze::analyze_image))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Health check endpoint listing the categories the model knows
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let model = &state.model;

    Json(HealthResponse {
        status: "OK",
        model_loaded: true,
        ai_features: AiFeatures {
            semantic_search: true,
            nlp_time_parsing: true,
            image_analysis: true,
        },
        available_styles: model.style_encoder.classes().to_vec(),
        available_genders: model.gender_encoder.classes().to_vec(),
        available_seasons: model.season_encoder.classes().to_vec(),
    })
}
