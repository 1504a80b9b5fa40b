mod garment;
mod prediction;
mod season;
mod style;

pub use garment::{
    ColorEntry, DisplayGarment, GarmentItem, GarmentRecord, MaterialEntry, NormalizedResults,
    RawBundle,
};
pub use prediction::{
    AiFeatures, AnalyzeImageRequest, AnalyzeImageResponse, DetectedStyle, HealthResponse,
    PredictionRequest, PredictionResponse,
};
pub use season::Season;
pub use style::{KnownStyles, MatchTier, StyleLabel, StyleMatch};
