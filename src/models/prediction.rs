use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ColorEntry, DisplayGarment, MaterialEntry, StyleLabel};

/// Body of `POST /predict`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    /// Free text ("3 meses") or a bare number of months
    #[serde(default)]
    pub time: Option<Value>,
}

impl PredictionRequest {
    /// Time horizon as text. Numbers are rendered; zero, null and other
    /// JSON types count as absent.
    pub fn time_text(&self) -> Option<String> {
        match self.time.as_ref()? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) if number.as_f64() == Some(0.0) => None,
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// Explicit season, ignoring blank strings
    pub fn explicit_season(&self) -> Option<&str> {
        self.season.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Body returned by `POST /predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub matched_style: StyleLabel,
    pub style_similarity: f64,
    pub style_description: String,
    pub original_input: Option<String>,
    pub prendas: Vec<DisplayGarment>,
    pub colores: Vec<ColorEntry>,
    pub materiales: Vec<MaterialEntry>,
    pub tiendas_accesibles: Vec<String>,
    pub tiendas_lujo: Vec<String>,
}

/// Body of `POST /analyze-image`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// One candidate style detected in an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedStyle {
    pub style: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeImageResponse {
    pub success: bool,
    pub detected_styles: Vec<DetectedStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiFeatures {
    pub semantic_search: bool,
    pub nlp_time_parsing: bool,
    pub image_analysis: bool,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub ai_features: AiFeatures,
    pub available_styles: Vec<String>,
    pub available_genders: Vec<String>,
    pub available_seasons: Vec<String>,
}
