//! Hugging Face inference API provider (CLIP zero-shot image classification)
//!
//! Sends the image with the candidate style labels and keeps the first
//! [`TOP_STYLES`] entries of the ranked response, in the order received.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{DetectedStyle, StyleLabel},
};

use super::{ImagePayload, ImageStyleClassifier, TOP_STYLES};

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Clone)]
pub struct HuggingFaceClassifier {
    http_client: HttpClient,
    api_url: String,
    api_token: Option<String>,
}

impl HuggingFaceClassifier {
    /// Creates a classifier whose requests give up after `timeout`
    pub fn new(api_url: String, api_token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
            api_token,
        })
    }

    fn top_styles(scores: Vec<LabelScore>) -> Vec<DetectedStyle> {
        scores
            .into_iter()
            .take(TOP_STYLES)
            .map(|item| DetectedStyle {
                style: item.label,
                confidence: item.score,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ImageStyleClassifier for HuggingFaceClassifier {
    async fn classify(
        &self,
        image: &ImagePayload,
        candidates: &[StyleLabel],
    ) -> Option<Vec<DetectedStyle>> {
        let body = ZeroShotRequest {
            inputs: image.as_base64(),
            parameters: ZeroShotParameters {
                candidate_labels: candidates.iter().map(StyleLabel::as_str).collect(),
            },
        };

        let mut request = self.http_client.post(&self.api_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    "Image classifier unreachable"
                );
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, detail = %detail, "Image classifier returned an error");
            return None;
        }

        match response.json::<Vec<LabelScore>>().await {
            Ok(scores) => {
                let styles = Self::top_styles(scores);
                tracing::info!(
                    provider = self.name(),
                    detected = styles.len(),
                    "Image classification completed"
                );
                Some(styles)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Image classifier response could not be decoded");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "hugging_face"
    }
}
