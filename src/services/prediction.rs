use crate::{
    error::{AppError, AppResult, CategoryField},
    lexicon::Lexicon,
    ml::{EncodedFeatures, LabelEncoder, PredictionModel},
    models::{PredictionRequest, PredictionResponse},
};

use super::{
    enrichment::normalize_results, season::infer_season, style_matcher::find_similar_style,
    time_parser::parse_time_natural,
};

/// Similarity under which the match is logged as a weak guess
const LOW_SIMILARITY: f64 = 0.5;

/// Resolves free text to a known category and its code
fn resolve_category(
    encoder: &LabelEncoder,
    field: CategoryField,
    value: Option<&str>,
) -> AppResult<u32> {
    let not_found = || AppError::CategoryNotFound {
        field,
        value: value.unwrap_or_default().to_string(),
    };

    let label = encoder.resolve(value.unwrap_or_default()).ok_or_else(not_found)?;
    encoder.encode(label).ok_or_else(not_found)
}

/// Produces a recommendation bundle for one request.
///
/// Style, time and season inference never fail. Only gender and season
/// resolution against the model's categories can reject a request.
/// `current_month` is 1-based and anchors season inference.
pub fn predict(
    lexicon: &Lexicon,
    model: &PredictionModel,
    request: &PredictionRequest,
    current_month: u32,
) -> AppResult<PredictionResponse> {
    let style_match = find_similar_style(
        request.style.as_deref().unwrap_or_default(),
        model.styles(),
    );
    tracing::info!(
        input = ?request.style,
        matched = %style_match.style,
        similarity = style_match.similarity(),
        "Style resolved"
    );
    if style_match.similarity() < LOW_SIMILARITY {
        tracing::info!(matched = %style_match.style, "Low similarity, using closest known style");
    }

    let time_text = request.time_text();
    let months = parse_time_natural(time_text.as_deref());
    if let Some(text) = &time_text {
        tracing::info!(time = %text, months, "Time horizon parsed");
    }

    let gender = resolve_category(
        &model.gender_encoder,
        CategoryField::Gender,
        request.gender.as_deref(),
    )?;

    let season_text = match request.explicit_season() {
        Some(season) => season.to_string(),
        None => {
            let inferred = infer_season(current_month, months);
            tracing::info!(season = %inferred, months, "Season inferred from time horizon");
            inferred.label().to_string()
        }
    };
    let season = resolve_category(
        &model.season_encoder,
        CategoryField::Season,
        Some(&season_text),
    )?;

    let style = model
        .style_encoder
        .encode(style_match.style.as_str())
        .ok_or_else(|| {
            AppError::Internal(format!("style '{}' cannot be encoded", style_match.style))
        })?;

    let raw = model.predict_bundle(EncodedFeatures {
        style,
        gender,
        season,
    })?;
    let results = normalize_results(lexicon, &raw);
    let style_description = lexicon.style_description(style_match.style.as_str());

    tracing::info!(garments = results.prendas.len(), "Prediction completed");

    Ok(PredictionResponse {
        success: true,
        style_similarity: style_match.similarity(),
        matched_style: style_match.style,
        style_description,
        original_input: request.style.clone(),
        prendas: results.prendas,
        colores: results.colores,
        materiales: results.materiales,
        tiendas_accesibles: results.tiendas_accesibles,
        tiendas_lujo: results.tiendas_lujo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ml::{classifier::MockClassifier, results::MockResultsTable},
        models::{GarmentItem, RawBundle},
    };
    use mockall::predicate::eq;
    use serde_json::json;

    fn encoder(classes: &[&str]) -> LabelEncoder {
        LabelEncoder::new(classes.iter().map(|c| c.to_string()).collect())
    }

    fn bundle() -> RawBundle {
        RawBundle {
            prendas: vec![GarmentItem::Name("polo".into())],
            colores: vec!["azul marino".into()],
            materiales: vec!["algodon".into()],
            tiendas_accesibles: vec!["Massimo Dutti".into()],
            tiendas_lujo: vec!["Ralph Lauren".into()],
        }
    }

    /// Model whose classifier expects exactly `features` and answers combination 4
    fn model_expecting(features: EncodedFeatures) -> PredictionModel {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_predict()
            .with(eq(features))
            .times(1)
            .return_const(Some(4));

        let mut results = MockResultsTable::new();
        results
            .expect_lookup()
            .with(eq(4))
            .times(1)
            .return_const(Some(bundle()));

        PredictionModel::new(
            encoder(&["Cayetano", "Old Money", "Urbano/Streetwear"]),
            encoder(&["Hombre", "Mujer"]),
            encoder(&["Invierno", "Otono", "Primavera", "Verano"]),
            Box::new(classifier),
            Box::new(results),
        )
        .unwrap()
    }

    /// Model that must never reach the classifier
    fn model_rejecting() -> PredictionModel {
        let mut classifier = MockClassifier::new();
        classifier.expect_predict().never();
        let mut results = MockResultsTable::new();
        results.expect_lookup().never();

        PredictionModel::new(
            encoder(&["Cayetano"]),
            encoder(&["Hombre", "Mujer"]),
            encoder(&["Invierno", "Verano"]),
            Box::new(classifier),
            Box::new(results),
        )
        .unwrap()
    }

    fn features(style: u32, gender: u32, season: u32) -> EncodedFeatures {
        EncodedFeatures {
            style,
            gender,
            season,
        }
    }

    fn request(body: serde_json::Value) -> PredictionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_exact_style_with_inferred_season() {
        // October + 2 months = December -> Invierno (code 0)
        let model = model_expecting(features(0, 0, 0));
        let response = predict(
            &Lexicon::builtin(),
            &model,
            &request(json!({
                "style": "cayetano",
                "gender": "Hombre",
                "season": null,
                "time": "2 meses"
            })),
            10,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.matched_style.as_str(), "Cayetano");
        assert_eq!(response.style_similarity, 1.0);
        assert!(response.style_description.starts_with("Una evolución del estilo cayetano"));
        assert_eq!(response.original_input.as_deref(), Some("cayetano"));
        assert_eq!(response.prendas[0].nombre, "Polo");
        assert!(response.prendas[0].descripcion.is_some());
        assert_eq!(response.colores[0].hex, "#000080");
        assert_eq!(response.materiales[0].nombre, "Algodon");
        assert_eq!(response.tiendas_accesibles, vec!["Massimo Dutti"]);
        assert_eq!(response.tiendas_lujo, vec!["Ralph Lauren"]);
    }

    #[test]
    fn test_explicit_season_and_partial_style() {
        let model = model_expecting(features(2, 1, 3));
        let response = predict(
            &Lexicon::builtin(),
            &model,
            &request(json!({ "style": "streetwear", "gender": "MUJER", "season": "verano" })),
            1,
        )
        .unwrap();

        assert_eq!(response.matched_style.as_str(), "Urbano/Streetwear");
        assert_eq!(response.style_similarity, 0.8);
    }

    #[test]
    fn test_unmatched_style_falls_back() {
        // No time given: one month ahead of March -> April -> Primavera (code 2)
        let model = model_expecting(features(0, 0, 2));
        let response = predict(
            &Lexicon::builtin(),
            &model,
            &request(json!({ "style": "asdfgh", "gender": "hombre" })),
            3,
        )
        .unwrap();

        assert_eq!(response.matched_style.as_str(), "Cayetano");
        assert_eq!(response.style_similarity, 0.1);
    }

    #[test]
    fn test_unknown_gender_names_the_field() {
        let result = predict(
            &Lexicon::builtin(),
            &model_rejecting(),
            &request(json!({ "style": "cayetano", "gender": "Otro" })),
            10,
        );

        match result {
            Err(AppError::CategoryNotFound { field, value }) => {
                assert_eq!(field, CategoryField::Gender);
                assert_eq!(value, "Otro");
            }
            other => panic!("expected CategoryNotFound, got {:?}", other.map(|r| r.matched_style)),
        }
    }

    #[test]
    fn test_missing_gender_is_not_found() {
        let result = predict(&Lexicon::builtin(), &model_rejecting(), &request(json!({})), 10);
        assert!(matches!(
            result,
            Err(AppError::CategoryNotFound { field: CategoryField::Gender, .. })
        ));
    }

    #[test]
    fn test_inferred_season_missing_from_encoder() {
        // October + 1 month -> Otono, which this model does not know
        let result = predict(
            &Lexicon::builtin(),
            &model_rejecting(),
            &request(json!({ "gender": "Hombre", "time": "1 mes" })),
            10,
        );
        assert!(matches!(
            result,
            Err(AppError::CategoryNotFound { field: CategoryField::Season, .. })
        ));
    }

    #[test]
    fn test_unknown_explicit_season() {
        let result = predict(
            &Lexicon::builtin(),
            &model_rejecting(),
            &request(json!({ "gender": "Hombre", "season": "Monzon" })),
            10,
        );

        match result {
            Err(AppError::CategoryNotFound { field, value }) => {
                assert_eq!(field, CategoryField::Season);
                assert_eq!(value, "Monzon");
            }
            _ => panic!("expected CategoryNotFound for season"),
        }
    }
}
