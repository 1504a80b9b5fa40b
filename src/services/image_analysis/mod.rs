//! Image style classification
//!
//! The classifier is an external zero-shot service. It receives the image and
//! the known style labels as candidates and ranks the candidates.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{
    error::{AppError, AppResult},
    models::{DetectedStyle, StyleLabel},
};

pub mod hugging_face;

pub use hugging_face::HuggingFaceClassifier;

/// Number of ranked styles returned to clients
pub const TOP_STYLES: usize = 3;

/// Trait for image style classifiers
///
/// Failures of the remote service are not errors at this seam: implementations
/// log them and return `None`, which callers report as "could not analyze".
#[async_trait::async_trait]
pub trait ImageStyleClassifier: Send + Sync {
    /// Ranks `candidates` for the image, best first, at most [`TOP_STYLES`] entries
    async fn classify(
        &self,
        image: &ImagePayload,
        candidates: &[StyleLabel],
    ) -> Option<Vec<DetectedStyle>>;

    /// Classifier name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Validated base64 image body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    base64: String,
    size: usize,
}

impl ImagePayload {
    /// Accepts plain base64 or a data URL (`data:image/png;base64,...`)
    pub fn parse(raw: &str) -> AppResult<Self> {
        let encoded = match raw.split_once(',') {
            Some((_, data)) => data,
            None => raw,
        }
        .trim();

        if encoded.is_empty() {
            return Err(AppError::Validation("No se proporciono imagen".to_string()));
        }

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| AppError::Validation(format!("Imagen no valida: {}", e)))?;

        Ok(Self {
            base64: encoded.to_string(),
            size: bytes.len(),
        })
    }

    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// Decoded size in bytes
    pub fn size(&self) -> usize {
        self.size
    }
}
