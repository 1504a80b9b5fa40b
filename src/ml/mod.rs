//! The trained model and its companion artifacts.
//!
//! Loaded once at startup from a JSON export and never mutated. The
//! classifier and results table sit behind traits so tests can swap them.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{KnownStyles, RawBundle},
};

pub mod classifier;
pub mod encoder;
pub mod results;

pub use classifier::{Classifier, EncodedFeatures, PredictionRow, TableClassifier};
pub use encoder::LabelEncoder;
pub use results::{CombinationTable, ResultsTable};

/// On-disk model export
#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    pub style_classes: Vec<String>,
    pub gender_classes: Vec<String>,
    pub season_classes: Vec<String>,
    pub predictions: Vec<PredictionRow>,
    pub idx_to_combination: Vec<String>,
    pub results_map: HashMap<String, RawBundle>,
}

impl ModelArtifact {
    /// Checks that every decision can be encoded and resolved to a bundle
    fn validate(&self) -> AppResult<()> {
        for (name, classes) in [
            ("style", &self.style_classes),
            ("gender", &self.gender_classes),
            ("season", &self.season_classes),
        ] {
            if classes.is_empty() {
                return Err(AppError::ModelArtifact(format!(
                    "{} encoder has no classes",
                    name
                )));
            }
        }

        let mut decided = HashSet::with_capacity(self.predictions.len());
        for row in &self.predictions {
            let features = row.features;
            let in_range = (features.style as usize) < self.style_classes.len()
                && (features.gender as usize) < self.gender_classes.len()
                && (features.season as usize) < self.season_classes.len();
            if !in_range {
                return Err(AppError::ModelArtifact(format!(
                    "decision {:?} references an unknown class",
                    features
                )));
            }
            if row.prediction as usize >= self.idx_to_combination.len() {
                return Err(AppError::ModelArtifact(format!(
                    "prediction {} has no combination",
                    row.prediction
                )));
            }
            if !decided.insert(features) {
                return Err(AppError::ModelArtifact(format!(
                    "decision {:?} appears more than once",
                    features
                )));
            }
        }

        // Rows are in range and unique, so matching the count means full coverage
        let expected =
            self.style_classes.len() * self.gender_classes.len() * self.season_classes.len();
        if decided.len() != expected {
            return Err(AppError::ModelArtifact(format!(
                "decision table covers {} of {} feature combinations",
                decided.len(),
                expected
            )));
        }

        if let Some(missing) = self
            .idx_to_combination
            .iter()
            .find(|key| !self.results_map.contains_key(key.as_str()))
        {
            return Err(AppError::ModelArtifact(format!(
                "combination '{}' has no results",
                missing
            )));
        }

        Ok(())
    }
}

/// Encoders, classifier and results table behind one read-only handle
pub struct PredictionModel {
    pub style_encoder: LabelEncoder,
    pub gender_encoder: LabelEncoder,
    pub season_encoder: LabelEncoder,
    styles: KnownStyles,
    classifier: Box<dyn Classifier>,
    results: Box<dyn ResultsTable>,
}

impl std::fmt::Debug for PredictionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionModel")
            .field("styles", &self.style_encoder.len())
            .field("genders", &self.gender_encoder.len())
            .field("seasons", &self.season_encoder.len())
            .finish_non_exhaustive()
    }
}

impl PredictionModel {
    pub fn new(
        style_encoder: LabelEncoder,
        gender_encoder: LabelEncoder,
        season_encoder: LabelEncoder,
        classifier: Box<dyn Classifier>,
        results: Box<dyn ResultsTable>,
    ) -> AppResult<Self> {
        let styles = KnownStyles::new(style_encoder.classes().iter().cloned())?;

        Ok(Self {
            style_encoder,
            gender_encoder,
            season_encoder,
            styles,
            classifier,
            results,
        })
    }

    /// Builds a model from a parsed artifact
    pub fn from_artifact(artifact: ModelArtifact) -> AppResult<Self> {
        artifact.validate()?;

        Self::new(
            LabelEncoder::new(artifact.style_classes),
            LabelEncoder::new(artifact.gender_classes),
            LabelEncoder::new(artifact.season_classes),
            Box::new(TableClassifier::new(artifact.predictions)),
            Box::new(CombinationTable::new(
                artifact.idx_to_combination,
                artifact.results_map,
            )),
        )
    }

    /// Reads and validates a JSON artifact
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::ModelArtifact(format!("cannot read {}: {}", path.display(), e))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&contents).map_err(|e| {
            AppError::ModelArtifact(format!("cannot parse {}: {}", path.display(), e))
        })?;

        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            path = %path.display(),
            styles = ?model.style_encoder.classes(),
            genders = ?model.gender_encoder.classes(),
            seasons = ?model.season_encoder.classes(),
            "Loaded prediction model"
        );

        Ok(model)
    }

    /// Styles the model knows, in encoder order
    pub fn styles(&self) -> &KnownStyles {
        &self.styles
    }

    /// Runs the classifier and fetches the raw bundle for its prediction.
    ///
    /// A miss in either step means the artifact is inconsistent with its
    /// encoders and is reported as an internal error.
    pub fn predict_bundle(&self, features: EncodedFeatures) -> AppResult<RawBundle> {
        let combination_id = self.classifier.predict(features).ok_or_else(|| {
            AppError::Internal(format!("classifier has no decision for {:?}", features))
        })?;

        self.results.lookup(combination_id).ok_or_else(|| {
            AppError::Internal(format!("no results for combination {}", combination_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STYLES: [&str; 2] = ["Cayetano", "Pijo"];
    const GENDERS: [&str; 2] = ["Hombre", "Mujer"];
    const SEASONS: [&str; 2] = ["Invierno", "Verano"];

    /// Artifact with one decision and one bundle per style/gender/season triple
    fn artifact_json() -> serde_json::Value {
        let mut predictions = Vec::new();
        let mut combinations = Vec::new();
        let mut results = serde_json::Map::new();

        for (s, style) in STYLES.iter().enumerate() {
            for (g, gender) in GENDERS.iter().enumerate() {
                for (z, season) in SEASONS.iter().enumerate() {
                    let key = format!("{}|{}|{}", style, gender, season);
                    predictions.push(json!({
                        "style": s,
                        "gender": g,
                        "season": z,
                        "prediction": combinations.len()
                    }));
                    results.insert(key.clone(), json!({ "prendas": [style.to_lowercase()] }));
                    combinations.push(key);
                }
            }
        }

        json!({
            "style_classes": STYLES,
            "gender_classes": GENDERS,
            "season_classes": SEASONS,
            "predictions": predictions,
            "idx_to_combination": combinations,
            "results_map": results,
        })
    }

    fn artifact(value: serde_json::Value) -> ModelArtifact {
        serde_json::from_value(value).unwrap()
    }

    fn features(style: u32, gender: u32, season: u32) -> EncodedFeatures {
        EncodedFeatures {
            style,
            gender,
            season,
        }
    }

    #[test]
    fn test_from_artifact_and_predict() {
        let model = PredictionModel::from_artifact(artifact(artifact_json())).unwrap();

        assert_eq!(model.styles().as_slice().len(), 2);
        assert_eq!(model.styles().first().as_str(), "Cayetano");

        let bundle = model.predict_bundle(features(1, 1, 1)).unwrap();
        assert_eq!(bundle.prendas.len(), 1);
    }

    #[test]
    fn test_every_valid_triple_has_a_bundle() {
        let model = PredictionModel::from_artifact(artifact(artifact_json())).unwrap();

        for style in 0..2 {
            for gender in 0..2 {
                for season in 0..2 {
                    assert!(model.predict_bundle(features(style, gender, season)).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_rejects_incomplete_decision_table() {
        let mut value = artifact_json();
        value["predictions"] = json!([
            { "style": 0, "gender": 0, "season": 0, "prediction": 0 }
        ]);
        let result = PredictionModel::from_artifact(artifact(value));
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_rejects_duplicate_decision() {
        let mut value = artifact_json();
        value["predictions"][7] = json!({ "style": 0, "gender": 0, "season": 0, "prediction": 7 });
        let result = PredictionModel::from_artifact(artifact(value));
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_rejects_empty_encoder() {
        let mut value = artifact_json();
        value["gender_classes"] = json!([]);
        let result = PredictionModel::from_artifact(artifact(value));
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_rejects_out_of_range_decision() {
        let mut value = artifact_json();
        value["predictions"][0]["season"] = json!(5);
        let result = PredictionModel::from_artifact(artifact(value));
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_rejects_combination_without_results() {
        let mut value = artifact_json();
        value["idx_to_combination"][1] = json!("Pijo|Hombre|Otono");
        let result = PredictionModel::from_artifact(artifact(value));
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PredictionModel::load("/nonexistent/fashion_model.json");
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }
}
