//! Rewrites raw result bundles into display-ready form.
//!
//! Nothing here fails or drops entries: lexicon misses degrade to the
//! lexicon's fallbacks.

use crate::{
    lexicon::Lexicon,
    models::{
        ColorEntry, DisplayGarment, GarmentItem, GarmentRecord, MaterialEntry, NormalizedResults,
        RawBundle,
    },
};

use super::text::capitalize_first_only;

/// Source-data marker for "no description available"
pub const NO_DESCRIPTION_MARKER: &str = "Exclusividad";

/// Normalizes one garment, dispatching on its shape
pub fn normalize_garment(lexicon: &Lexicon, item: &GarmentItem) -> DisplayGarment {
    match item {
        GarmentItem::Name(name) => DisplayGarment {
            nombre: capitalize_first_only(name),
            descripcion: lexicon.garment_description(name).map(str::to_string),
            estilo: None,
        },
        GarmentItem::Record(record) => normalize_record(lexicon, record),
    }
}

/// Lexicon description wins; otherwise the payload's own description unless
/// it carries the [`NO_DESCRIPTION_MARKER`].
fn normalize_record(lexicon: &Lexicon, record: &GarmentRecord) -> DisplayGarment {
    let name = record.nombre.as_deref().unwrap_or_default();

    let descripcion = lexicon
        .garment_description(name)
        .map(str::to_string)
        .or_else(|| {
            record
                .descripcion
                .as_deref()
                .filter(|d| !d.is_empty() && !d.starts_with(NO_DESCRIPTION_MARKER))
                .map(capitalize_first_only)
        });

    let estilo = record
        .estilo
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(capitalize_first_only);

    DisplayGarment {
        nombre: capitalize_first_only(name),
        descripcion,
        estilo,
    }
}

pub fn normalize_color(lexicon: &Lexicon, color: &str) -> ColorEntry {
    ColorEntry {
        nombre: capitalize_first_only(color),
        hex: lexicon.color_hex(color).to_string(),
    }
}

pub fn normalize_material(lexicon: &Lexicon, material: &str) -> MaterialEntry {
    MaterialEntry {
        nombre: capitalize_first_only(material),
        descripcion: lexicon.material_description(material).to_string(),
    }
}

/// Enriches every list of a raw bundle. Store lists pass through untouched.
pub fn normalize_results(lexicon: &Lexicon, raw: &RawBundle) -> NormalizedResults {
    NormalizedResults {
        prendas: raw
            .prendas
            .iter()
            .map(|item| normalize_garment(lexicon, item))
            .collect(),
        colores: raw
            .colores
            .iter()
            .map(|color| normalize_color(lexicon, color))
            .collect(),
        materiales: raw
            .materiales
            .iter()
            .map(|material| normalize_material(lexicon, material))
            .collect(),
        tiendas_accesibles: raw.tiendas_accesibles.clone(),
        tiendas_lujo: raw.tiendas_lujo.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{FALLBACK_COLOR_HEX, FALLBACK_MATERIAL_DESCRIPTION};

    fn record(nombre: &str, descripcion: Option<&str>, estilo: Option<&str>) -> GarmentItem {
        GarmentItem::Record(GarmentRecord {
            nombre: Some(nombre.to_string()),
            descripcion: descripcion.map(str::to_string),
            estilo: estilo.map(str::to_string),
        })
    }

    fn lexicon_without_garments() -> Lexicon {
        Lexicon::new(&[("rojo", "#FF0000")], &[], &[], &[])
    }

    #[test]
    fn test_empty_bundle_yields_all_lists_empty() {
        let results = normalize_results(&Lexicon::builtin(), &RawBundle::default());
        assert_eq!(results, NormalizedResults::default());

        let json = serde_json::to_value(&results).unwrap();
        for key in ["prendas", "colores", "materiales", "tiendas_accesibles", "tiendas_lujo"] {
            assert_eq!(json[key], serde_json::json!([]), "{} should be an empty list", key);
        }
    }

    #[test]
    fn test_bare_garment_name() {
        let garment = normalize_garment(&Lexicon::builtin(), &GarmentItem::Name("CAMISA".into()));
        assert_eq!(garment.nombre, "Camisa");
        assert_eq!(
            garment.descripcion.as_deref(),
            Some("prenda de vestir con cuello y botones, versátil para looks formales y casuales")
        );
        assert_eq!(garment.estilo, None);
    }

    #[test]
    fn test_lexicon_description_beats_payload() {
        let garment = normalize_garment(
            &Lexicon::builtin(),
            &record("camisa", Some("camisa de lino"), Some("clasico")),
        );
        assert_eq!(
            garment.descripcion.as_deref(),
            Some("prenda de vestir con cuello y botones, versátil para looks formales y casuales")
        );
        assert_eq!(garment.estilo.as_deref(), Some("Clasico"));
    }

    #[test]
    fn test_marker_description_is_dropped() {
        let garment = normalize_garment(
            &lexicon_without_garments(),
            &record("Camisa", Some("Exclusividad de temporada"), None),
        );
        assert_eq!(garment.nombre, "Camisa");
        assert_eq!(garment.descripcion, None);
    }

    #[test]
    fn test_payload_description_used_on_lexicon_miss() {
        let garment = normalize_garment(
            &lexicon_without_garments(),
            &record("Camisa", Some("CAMISA DE CORTE RECTO"), Some("")),
        );
        assert_eq!(garment.descripcion.as_deref(), Some("Camisa de corte recto"));
        assert_eq!(garment.estilo, None);
    }

    #[test]
    fn test_record_without_anything() {
        let garment = normalize_garment(
            &Lexicon::builtin(),
            &GarmentItem::Record(GarmentRecord::default()),
        );
        assert_eq!(garment.nombre, "");
        assert_eq!(garment.descripcion, None);
        assert_eq!(garment.estilo, None);
    }

    #[test]
    fn test_colors_and_materials_never_fail() {
        let lexicon = Lexicon::builtin();
        let raw = RawBundle {
            colores: vec!["ROJO".into(), "ultravioleta".into()],
            materiales: vec!["lino".into(), "grafeno".into()],
            ..RawBundle::default()
        };

        let results = normalize_results(&lexicon, &raw);

        assert_eq!(results.colores.len(), 2);
        assert_eq!(results.colores[0].nombre, "Rojo");
        assert_eq!(results.colores[0].hex, "#FF0000");
        assert_eq!(results.colores[1].hex, FALLBACK_COLOR_HEX);

        assert_eq!(results.materiales.len(), 2);
        assert_eq!(results.materiales[0].nombre, "Lino");
        assert_eq!(results.materiales[1].descripcion, FALLBACK_MATERIAL_DESCRIPTION);
    }

    #[test]
    fn test_store_lists_pass_through() {
        let raw = RawBundle {
            tiendas_accesibles: vec!["zara".into(), "Mango".into()],
            tiendas_lujo: vec!["Loewe".into()],
            ..RawBundle::default()
        };

        let results = normalize_results(&Lexicon::builtin(), &raw);
        assert_eq!(results.tiendas_accesibles, vec!["zara", "Mango"]);
        assert_eq!(results.tiendas_lujo, vec!["Loewe"]);
    }
}
