use std::{sync::Arc, time::Duration};

use anyhow::Context;
use moda_api::{
    config::Config, lexicon::Lexicon, middleware::cors_layer, ml::PredictionModel,
    routes::create_router, services::image_analysis::HuggingFaceClassifier, state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moda_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let model = PredictionModel::load(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path))?;

    if config.hf_token.is_none() {
        tracing::warn!("HF_TOKEN not set, image analysis requests will be unauthenticated");
    }
    let image_classifier = HuggingFaceClassifier::new(
        config.clip_api_url.clone(),
        config.hf_token.clone(),
        Duration::from_secs(config.image_timeout_secs),
    )?;

    let state = AppState::new(Lexicon::builtin(), model, Arc::new(image_classifier));
    let app = create_router(Arc::new(state)).layer(cors_layer(&config.allowed_origins));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
