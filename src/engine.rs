//! The candidate search engine.
//!
//! [`SearchEngine`] ties a [`CandidateSource`], a [`QueryParameterExtractor`],
//! the [`QueryExpander`] and the [`CompositeRanker`] together. A search runs
//! these phases:
//!
//! 1. extract structured parameters from the query (degrading on failure)
//! 2. fetch candidates, pre-filtered by the first extracted location
//! 3. collect and expand the query terms
//! 4. build the corpus and rank the candidates

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::candidate::{CandidateRecord, CandidateSource};
use crate::error::{Result, ScoutError};
use crate::query::{
    KeywordExtractor, QueryExpander, QueryParameterExtractor, QueryParameters, extract_or_degrade,
};
use crate::ranking::{CompositeRanker, RankedCandidate, RankingConfig};

/// How a query was understood.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryAnalysis {
    /// Parameters returned by the extractor, or the fallback
    pub parameters: QueryParameters,
    /// Terms after expansion
    pub expanded_terms: BTreeSet<String>,
    /// Location passed to the candidate source, if any
    pub location_filter: Option<String>,
    /// Whether extraction failed and the fallback was used
    pub degraded: bool,
}

/// The result of a search.
#[derive(Clone, Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RankedCandidate>,
    pub analysis: QueryAnalysis,
    /// Number of candidates that were ranked
    pub candidates_considered: usize,
    #[serde(skip)]
    pub search_time_ms: f64,
}

/// Search facade over a candidate source.
pub struct SearchEngine {
    source: Arc<dyn CandidateSource>,
    extractor: Box<dyn QueryParameterExtractor>,
    expander: QueryExpander,
    ranker: CompositeRanker,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("source", &self.source.name())
            .field("extractor", &self.extractor.name())
            .field("expander", &self.expander)
            .field("ranker", &self.ranker)
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine using the keyword extractor.
    pub fn new(source: Arc<dyn CandidateSource>, config: RankingConfig) -> Result<Self> {
        Self::with_extractor(source, Box::new(KeywordExtractor::new()), config)
    }

    /// Create an engine with a specific extractor.
    pub fn with_extractor(
        source: Arc<dyn CandidateSource>,
        extractor: Box<dyn QueryParameterExtractor>,
        config: RankingConfig,
    ) -> Result<Self> {
        let expander = QueryExpander::new().with_institutions(config.institutions);
        let ranker = CompositeRanker::new(config)?;

        Ok(SearchEngine {
            source,
            extractor,
            expander,
            ranker,
        })
    }

    pub fn source(&self) -> &Arc<dyn CandidateSource> {
        &self.source
    }

    pub fn expander(&self) -> &QueryExpander {
        &self.expander
    }

    pub fn ranker(&self) -> &CompositeRanker {
        &self.ranker
    }

    pub fn config(&self) -> &RankingConfig {
        self.ranker.config()
    }

    /// Search for candidates matching a free-text query.
    ///
    /// `top_k` defaults to the configured value when `None`. At most `top_k`
    /// results are returned, so `Some(0)` yields an empty list.
    pub fn search(&self, query: &str, top_k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();
        let top_k = top_k.unwrap_or(self.config().default_top_k);

        info!("Processing query: {query}");
        let extraction = extract_or_degrade(self.extractor.as_ref(), query);

        let location_filter = if self.config().location_prefilter {
            extraction.parameters.primary_location().map(str::to_string)
        } else {
            None
        };

        if let Some(location) = &location_filter {
            debug!("Filtering candidates by location: {location}");
        }
        let records = self.source.fetch(location_filter.as_deref())?;

        // Fallback terms are the raw query words and are ranked as they are.
        let expanded_terms = if extraction.degraded {
            extraction.parameters.terms()
        } else {
            self.expander.expand(&extraction.parameters.terms())
        };
        info!("Expanded search terms: {expanded_terms:?}");

        let documents = self.ranker.corpus_builder().build_all(records);
        let candidates_considered = documents.len();
        let results = self
            .ranker
            .rank(documents, expanded_terms.clone(), query, top_k);

        Ok(SearchResponse {
            results,
            analysis: QueryAnalysis {
                parameters: extraction.parameters,
                expanded_terms,
                location_filter,
                degraded: extraction.degraded,
            },
            candidates_considered,
            search_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Look up one candidate by identifier.
    pub fn get_by_id(&self, candidate_id: &str) -> Result<CandidateRecord> {
        self.source
            .get(candidate_id)?
            .ok_or_else(|| ScoutError::not_found(format!("candidate {candidate_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::InMemoryCandidateSource;
    use crate::query::PrecomputedExtractor;

    fn source() -> Arc<dyn CandidateSource> {
        Arc::new(InMemoryCandidateSource::new(vec![
            CandidateRecord::new("a")
                .with_description("Senior Python engineer AWS Docker")
                .with_location("New York"),
            CandidateRecord::new("b")
                .with_description("Junior Java developer")
                .with_location("Austin"),
        ]))
    }

    #[test]
    fn test_location_prefilter() {
        let parameters = QueryParameters {
            skills: vec!["Python".to_string()],
            locations: vec!["new york".to_string()],
            ..Default::default()
        };
        let engine = SearchEngine::with_extractor(
            source(),
            Box::new(PrecomputedExtractor::new(parameters)),
            RankingConfig::default(),
        )
        .unwrap();

        let response = engine.search("python in new york", None).unwrap();
        assert_eq!(response.analysis.location_filter.as_deref(), Some("new york"));
        assert_eq!(response.candidates_considered, 1);
        assert_eq!(response.results[0].id(), "a");
    }

    #[test]
    fn test_prefilter_disabled() {
        let parameters = QueryParameters {
            locations: vec!["new york".to_string()],
            ..Default::default()
        };
        let config = RankingConfig {
            location_prefilter: false,
            ..RankingConfig::default()
        };
        let engine = SearchEngine::with_extractor(
            source(),
            Box::new(PrecomputedExtractor::new(parameters)),
            config,
        )
        .unwrap();

        let response = engine.search("new york", None).unwrap();
        assert_eq!(response.analysis.location_filter, None);
        assert_eq!(response.candidates_considered, 2);
        assert_eq!(response.results[0].id(), "a");
    }

    #[test]
    fn test_zero_top_k_returns_nothing() {
        let engine = SearchEngine::new(source(), RankingConfig::default()).unwrap();
        let response = engine.search("python", Some(0)).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.candidates_considered, 2);

        let empty = SearchEngine::new(
            Arc::new(InMemoryCandidateSource::new(Vec::new())),
            RankingConfig::default(),
        )
        .unwrap();
        for top_k in [Some(0), Some(3), None] {
            assert!(empty.search("python", top_k).unwrap().results.is_empty());
        }
    }

    #[test]
    fn test_get_by_id() {
        let engine = SearchEngine::new(source(), RankingConfig::default()).unwrap();

        assert_eq!(engine.get_by_id("b").unwrap().id(), Some("b"));
        assert!(matches!(
            engine.get_by_id("missing"),
            Err(ScoutError::NotFound(_))
        ));
    }
}
