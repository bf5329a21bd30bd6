//! Query understanding: structured parameters, extraction and term expansion.

pub mod expansion;
pub mod extractor;
pub mod params;

pub use expansion::QueryExpander;
pub use extractor::{
    Extraction, KeywordExtractor, PrecomputedExtractor, QueryParameterExtractor,
    extract_or_degrade,
};
pub use params::QueryParameters;
