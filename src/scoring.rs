//! Relevance scorers for candidate documents.
//!
//! Each scorer turns a ranking pass's documents and query into a
//! [`ScoreMap`] from candidate identifier to raw score. Four scorers exist:
//!
//! - [`tfidf::TfIdfScorer`] - log-scaled term frequency times inverse document frequency
//! - [`bm25::Bm25Scorer`] - Okapi BM25 with length normalization
//! - [`similarity::SimilarityScorer`] - best fuzzy match of the raw query against the record's fields
//! - [`exact_match::ExactMatchScorer`] - fixed bonuses for location, institution and corpus matches
//!
//! Raw scores live on different scales and are brought to `[0, 1]` by
//! [`normalize::normalize_min_max`] before fusion.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::candidate::CandidateDocument;

pub mod bm25;
pub mod exact_match;
pub mod normalize;
pub mod similarity;
pub mod stats;
pub mod tfidf;

pub use bm25::{Bm25Params, Bm25Scorer};
pub use exact_match::ExactMatchScorer;
pub use normalize::normalize_min_max;
pub use similarity::{SimilarityScorer, fuzzy_similarity};
pub use stats::{CollectionStats, DocumentStats};
pub use tfidf::TfIdfScorer;

/// Mapping from candidate identifier to score.
pub type ScoreMap = AHashMap<String, f64>;

/// The query side of a ranking pass.
///
/// Holds the expanded term set, the raw query text, and the two derived
/// forms of each term: lowercased (for exact matching) and lowercased then
/// stemmed (for corpus token lookup). The derived lists follow the sorted
/// order of the term set, so distinct terms that reduce to the same form
/// each contribute.
#[derive(Clone, Debug, Default)]
pub struct ScoringQuery {
    terms: BTreeSet<String>,
    raw_query: String,
    lowercase_terms: Vec<String>,
    lookup_terms: Vec<String>,
}

impl ScoringQuery {
    /// Build a scoring query. Blank terms are dropped.
    pub fn new<S: Into<String>>(
        terms: BTreeSet<String>,
        raw_query: S,
        analyzer: &EnglishAnalyzer,
    ) -> Self {
        let terms: BTreeSet<String> = terms
            .into_iter()
            .filter(|term| !term.trim().is_empty())
            .collect();
        let lowercase_terms = terms.iter().map(|term| term.to_lowercase()).collect();
        let lookup_terms = terms
            .iter()
            .map(|term| analyzer.normalize_term(term))
            .collect();

        ScoringQuery {
            terms,
            raw_query: raw_query.into(),
            lowercase_terms,
            lookup_terms,
        }
    }

    pub fn terms(&self) -> &BTreeSet<String> {
        &self.terms
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn lowercase_terms(&self) -> &[String] {
        &self.lowercase_terms
    }

    pub fn lookup_terms(&self) -> &[String] {
        &self.lookup_terms
    }
}

/// Everything a scorer sees during one ranking pass.
#[derive(Debug)]
pub struct ScoringContext<'a> {
    pub documents: &'a [CandidateDocument],
    pub query: &'a ScoringQuery,
    /// Statistics over `documents`, in the same order
    pub stats: CollectionStats,
}

impl<'a> ScoringContext<'a> {
    /// Build the context, computing collection statistics once.
    pub fn new(documents: &'a [CandidateDocument], query: &'a ScoringQuery) -> Self {
        ScoringContext {
            documents,
            query,
            stats: CollectionStats::from_documents(documents),
        }
    }

    /// Iterate over documents paired with their statistics.
    pub fn iter(&self) -> impl Iterator<Item = (&CandidateDocument, &DocumentStats)> {
        self.documents.iter().zip(self.stats.documents.iter())
    }
}

/// A relevance scoring algorithm.
pub trait Scorer: Send + Sync + std::fmt::Debug {
    /// Score every document in the context. An empty context yields an
    /// empty map.
    fn score(&self, context: &ScoringContext<'_>) -> ScoreMap;

    /// Get the scorer's identifier.
    fn name(&self) -> &str;

    /// Get a human-readable description of the algorithm.
    fn description(&self) -> &str;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_query_forms() {
        let query = test_support::query(&["Engineers", "AWS", "  ", "New York"], "raw text");

        assert_eq!(query.terms().len(), 3);
        assert_eq!(query.raw_query(), "raw text");
        assert_eq!(query.lowercase_terms(), &["aws", "engineers", "new york"]);
        assert_eq!(query.lookup_terms(), &["aw", "engin", "new york"]);
    }

    #[test]
    fn test_context_pairs_documents_with_stats() {
        let documents = test_support::documents(&[("a", "python python"), ("b", "")]);
        let query = test_support::query(&["python"], "");
        let context = ScoringContext::new(&documents, &query);

        let pairs: Vec<_> = context.iter().map(|(d, s)| (d.id.as_str(), s.length)).collect();
        assert_eq!(pairs, vec![("a", 2), ("b", 0)]);
    }
}
