use std::fmt::Display;

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// One of the fashion styles the model was trained on.
///
/// Only [`KnownStyles`] hands these out, so a `StyleLabel` is always a label
/// the style encoder can encode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StyleLabel(String);

impl StyleLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StyleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed, ordered, non-empty set of style labels loaded at startup
#[derive(Debug, Clone)]
pub struct KnownStyles {
    labels: Vec<StyleLabel>,
}

impl KnownStyles {
    pub fn new<I, S>(labels: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<StyleLabel> = labels
            .into_iter()
            .map(|label| StyleLabel(label.into()))
            .collect();

        if labels.is_empty() {
            return Err(AppError::ModelArtifact(
                "style encoder has no classes".to_string(),
            ));
        }

        Ok(Self { labels })
    }

    /// First label in declaration order, used as the matching fallback
    pub fn first(&self) -> &StyleLabel {
        &self.labels[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleLabel> {
        self.labels.iter()
    }

    pub fn as_slice(&self) -> &[StyleLabel] {
        &self.labels
    }
}

/// How a style string was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Partial,
    Fallback,
}

impl MatchTier {
    /// Discrete similarity reported to clients. These are sentinels, not a
    /// continuous confidence.
    pub fn similarity(&self) -> f64 {
        match self {
            MatchTier::Exact => 1.0,
            MatchTier::Partial => 0.8,
            MatchTier::Fallback => 0.1,
        }
    }
}

/// Result of resolving free text against [`KnownStyles`]
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMatch {
    pub style: StyleLabel,
    pub tier: MatchTier,
}

impl StyleMatch {
    pub fn similarity(&self) -> f64 {
        self.tier.similarity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_styles_rejects_empty_set() {
        let result = KnownStyles::new(Vec::<String>::new());
        assert!(matches!(result, Err(AppError::ModelArtifact(_))));
    }

    #[test]
    fn test_known_styles_keeps_order() {
        let styles = KnownStyles::new(["Pijo", "Cayetano"]).unwrap();
        assert_eq!(styles.first().as_str(), "Pijo");
        let labels: Vec<&str> = styles.iter().map(StyleLabel::as_str).collect();
        assert_eq!(labels, vec!["Pijo", "Cayetano"]);
    }

    #[test]
    fn test_style_label_serializes_as_string() {
        let styles = KnownStyles::new(["Old Money"]).unwrap();
        let json = serde_json::to_string(styles.first()).unwrap();
        assert_eq!(json, r#""Old Money""#);
    }
}
