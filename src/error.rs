use std::fmt::Display;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request field resolved against a known category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Gender,
    Season,
}

impl CategoryField {
    /// Field name as it appears in the request body
    pub fn key(&self) -> &'static str {
        match self {
            CategoryField::Gender => "gender",
            CategoryField::Season => "season",
        }
    }

    fn not_found_message(&self, value: &str) -> String {
        match self {
            CategoryField::Gender => format!("Genero \"{}\" no encontrado", value),
            CategoryField::Season => format!("Estacion \"{}\" no encontrada", value),
        }
    }
}

impl Display for CategoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{}", .field.not_found_message(.value))]
    CategoryNotFound { field: CategoryField, value: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::CategoryNotFound { field, .. } => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string(), "field": field.key() }),
            ),
            AppError::ExternalService(_) | AppError::HttpClient(_) => {
                tracing::warn!(error = %self, "Image analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "No se pudo analizar la imagen" }),
                )
            }
            AppError::ModelArtifact(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed with an internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
