use std::sync::Arc;

use crate::{
    lexicon::Lexicon, ml::PredictionModel, services::image_analysis::ImageStyleClassifier,
};

/// Shared application state.
///
/// Everything here is built once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
    pub model: Arc<PredictionModel>,
    pub image_classifier: Arc<dyn ImageStyleClassifier>,
}

impl AppState {
    pub fn new(
        lexicon: Lexicon,
        model: PredictionModel,
        image_classifier: Arc<dyn ImageStyleClassifier>,
    ) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            model: Arc::new(model),
            image_classifier,
        }
    }
}
