pub mod enrichment;
pub mod image_analysis;
pub mod prediction;
pub mod season;
pub mod style_matcher;
pub mod text;
pub mod time_parser;
