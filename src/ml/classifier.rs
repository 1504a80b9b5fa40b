use std::collections::HashMap;

use serde::Deserialize;

/// Encoded model input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct EncodedFeatures {
    pub style: u32,
    pub gender: u32,
    pub season: u32,
}

/// Trained classifier: encoded features → prediction index.
///
/// Implementations are deterministic and read-only.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    fn predict(&self, features: EncodedFeatures) -> Option<u32>;
}

/// One exported decision of the trained model
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRow {
    #[serde(flatten)]
    pub features: EncodedFeatures,
    pub prediction: u32,
}

/// Classifier backed by the model's exported decision table
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    decisions: HashMap<EncodedFeatures, u32>,
}

impl TableClassifier {
    pub fn new(rows: impl IntoIterator<Item = PredictionRow>) -> Self {
        Self {
            decisions: rows
                .into_iter()
                .map(|row| (row.features, row.prediction))
                .collect(),
        }
    }
}

impl Classifier for TableClassifier {
    fn predict(&self, features: EncodedFeatures) -> Option<u32> {
        self.decisions.get(&features).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let rows: Vec<PredictionRow> = serde_json::from_str(
            r#"[
                {"style": 0, "gender": 1, "season": 2, "prediction": 7},
                {"style": 1, "gender": 0, "season": 0, "prediction": 3}
            ]"#,
        )
        .unwrap();
        let classifier = TableClassifier::new(rows);

        let features = |style, gender, season| EncodedFeatures {
            style,
            gender,
            season,
        };

        assert_eq!(classifier.predict(features(0, 1, 2)), Some(7));
        assert_eq!(classifier.predict(features(1, 0, 0)), Some(3));
        assert_eq!(classifier.predict(features(2, 2, 2)), None);
    }
}
