use serde::{Deserialize, Serialize};

/// Garment as stored in the results table: a bare name or a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GarmentItem {
    Name(String),
    Record(GarmentRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub estilo: Option<String>,
}

/// Raw recommendation bundle for one combination. Absent lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBundle {
    #[serde(default)]
    pub prendas: Vec<GarmentItem>,
    #[serde(default)]
    pub colores: Vec<String>,
    #[serde(default)]
    pub materiales: Vec<String>,
    #[serde(default)]
    pub tiendas_accesibles: Vec<String>,
    #[serde(default)]
    pub tiendas_lujo: Vec<String>,
}

/// Garment ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayGarment {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estilo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEntry {
    pub nombre: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialEntry {
    pub nombre: String,
    pub descripcion: String,
}

/// Enriched bundle. Every list is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedResults {
    pub prendas: Vec<DisplayGarment>,
    pub colores: Vec<ColorEntry>,
    pub materiales: Vec<MaterialEntry>,
    pub tiendas_accesibles: Vec<String>,
    pub tiendas_lujo: Vec<String>,
}
