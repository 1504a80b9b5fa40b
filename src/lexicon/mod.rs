//! Static display metadata for colors, garments, materials and styles.
//!
//! Tables are keyed by canonical text (see [`normalize_text`]) and built
//! once at startup. Every lookup is total: unknown names resolve to a
//! fallback instead of an error.

use std::collections::HashMap;

use crate::services::text::normalize_text;

mod colors;
mod garments;
mod materials;
mod styles;

/// Hex code for colors missing from the table
pub const FALLBACK_COLOR_HEX: &str = "#CCCCCC";

/// Description for materials missing from the table
pub const FALLBACK_MATERIAL_DESCRIPTION: &str = "material de calidad para confección de prendas";

type Table = &'static [(&'static str, &'static str)];

/// Read-only lookup tables shared by every request
#[derive(Debug, Clone)]
pub struct Lexicon {
    colors: HashMap<&'static str, &'static str>,
    /// Kept in declaration order for the partial-match tie-break
    garments: Vec<(&'static str, &'static str)>,
    materials: HashMap<&'static str, &'static str>,
    styles: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Builds a lexicon from explicit tables. Keys must already be canonical.
    pub fn new(colors: Table, garments: Table, materials: Table, styles: Table) -> Self {
        Self {
            colors: colors.iter().copied().collect(),
            garments: garments.to_vec(),
            materials: materials.iter().copied().collect(),
            styles: styles.iter().copied().collect(),
        }
    }

    /// The lexicon shipped with the service
    pub fn builtin() -> Self {
        Self::new(
            colors::COLOR_HEX,
            garments::GARMENT_DESCRIPTIONS,
            materials::MATERIAL_DESCRIPTIONS,
            styles::STYLE_DESCRIPTIONS,
        )
    }

    /// Hex code for a color name, case and accent insensitive
    pub fn color_hex(&self, color: &str) -> &'static str {
        self.colors
            .get(normalize_text(color).as_str())
            .copied()
            .unwrap_or(FALLBACK_COLOR_HEX)
    }

    /// Description for a garment name.
    ///
    /// Exact key match first, then the first key (in declaration order) that
    /// contains the name or is contained in it.
    ///
    /// Empty names never match, even though the empty string is contained in
    /// every key and plain substring matching would return the first entry.
    pub fn garment_description(&self, garment: &str) -> Option<&'static str> {
        let name = normalize_text(garment);
        if name.is_empty() {
            return None;
        }

        self.garments
            .iter()
            .find(|(key, _)| *key == name)
            .or_else(|| {
                self.garments
                    .iter()
                    .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
            })
            .map(|(_, description)| *description)
    }

    /// Description for a material name, with a generic fallback
    pub fn material_description(&self, material: &str) -> &'static str {
        self.materials
            .get(normalize_text(material).as_str())
            .copied()
            .unwrap_or(FALLBACK_MATERIAL_DESCRIPTION)
    }

    /// Narrative blurb for a style; unknown styles get a synthesized one
    pub fn style_description(&self, style: &str) -> String {
        match self.styles.get(normalize_text(style).as_str()) {
            Some(description) => description.to_string(),
            None => format!("Estilo {} que define las tendencias del momento", style),
        }
    }
}
