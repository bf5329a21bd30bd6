//! Query parameter extraction.
//!
//! Turning a free-text query into [`QueryParameters`] is an external step
//! (typically a language model) and is modelled as a fallible call. When it
//! fails, [`extract_or_degrade`] falls back to the whitespace-split query.

use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::error::Result;
use crate::query::params::QueryParameters;

/// A component that extracts structured parameters from a query.
pub trait QueryParameterExtractor: Send + Sync {
    /// Extract parameters from a natural-language query.
    fn extract(&self, query: &str) -> Result<QueryParameters>;

    /// Get the name of this extractor (for logging).
    fn name(&self) -> &'static str;
}

/// The outcome of an extraction attempt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Extraction {
    pub parameters: QueryParameters,
    /// Whether extraction failed and the fallback was used
    pub degraded: bool,
}

/// Run the extractor, falling back to [`QueryParameters::degraded`] on error.
pub fn extract_or_degrade(extractor: &dyn QueryParameterExtractor, query: &str) -> Extraction {
    match extractor.extract(query) {
        Ok(parameters) => {
            debug!("Extracted query parameters with {}: {parameters:?}", extractor.name());
            Extraction {
                parameters,
                degraded: false,
            }
        }
        Err(e) => {
            warn!(
                "Query parameter extraction with {} failed, using plain terms: {e}",
                extractor.name()
            );
            Extraction {
                parameters: QueryParameters::degraded(query),
                degraded: true,
            }
        }
    }
}

/// Extractor that uses the whitespace-split query as key terms.
#[derive(Clone, Debug, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        KeywordExtractor
    }
}

impl QueryParameterExtractor for KeywordExtractor {
    fn extract(&self, query: &str) -> Result<QueryParameters> {
        Ok(QueryParameters::degraded(query))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

/// Extractor returning parameters computed ahead of time, for example the
/// saved output of a language model.
#[derive(Clone, Debug)]
pub struct PrecomputedExtractor {
    parameters: QueryParameters,
}

impl PrecomputedExtractor {
    pub fn new(parameters: QueryParameters) -> Self {
        PrecomputedExtractor { parameters }
    }

    /// Load the parameters from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(QueryParameters::from_file(path)?))
    }

    pub fn parameters(&self) -> &QueryParameters {
        &self.parameters
    }
}

impl QueryParameterExtractor for PrecomputedExtractor {
    fn extract(&self, _query: &str) -> Result<QueryParameters> {
        Ok(self.parameters.clone())
    }

    fn name(&self) -> &'static str {
        "precomputed"
    }
}
