//! Composite ranking of candidate documents.
//!
//! A ranking pass runs the four scorers over the same documents and query,
//! min-max normalizes each score map, fuses them with the configured weights
//! and sorts by the composite score. The sort is stable, so candidates with
//! equal scores keep their source order.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::{debug, info, warn};

use crate::candidate::{CandidateDocument, CandidateRecord, CorpusBuilder};
use crate::error::Result;
use crate::ranking::config::RankingConfig;
use crate::ranking::result::{RankedCandidate, ScoreBreakdown, SignalScores};
use crate::scoring::{
    Bm25Scorer, ExactMatchScorer, ScoreMap, Scorer, ScoringContext, ScoringQuery,
    SimilarityScorer, TfIdfScorer, normalize_min_max,
};

/// Raw score maps of one ranking pass.
#[derive(Debug, Clone, Default)]
pub struct SignalMaps {
    pub bm25: ScoreMap,
    pub tfidf: ScoreMap,
    pub similarity: ScoreMap,
    pub exact_match: ScoreMap,
}

impl SignalMaps {
    /// Min-max normalize every map.
    pub fn normalized(&self) -> SignalMaps {
        SignalMaps {
            bm25: normalize_min_max(&self.bm25),
            tfidf: normalize_min_max(&self.tfidf),
            similarity: normalize_min_max(&self.similarity),
            exact_match: normalize_min_max(&self.exact_match),
        }
    }

    /// The scores of one candidate, 0.0 where a map has no entry.
    pub fn scores_for(&self, candidate_id: &str) -> SignalScores {
        let get = |map: &ScoreMap| map.get(candidate_id).copied().unwrap_or(0.0);
        SignalScores {
            bm25: get(&self.bm25),
            tfidf: get(&self.tfidf),
            similarity: get(&self.similarity),
            exact_match: get(&self.exact_match),
        }
    }
}

/// Weighted fusion of the BM25, TF-IDF, similarity and exact-match signals.
#[derive(Debug, Clone)]
pub struct CompositeRanker {
    config: RankingConfig,
    corpus_builder: CorpusBuilder,
    bm25: Bm25Scorer,
    tfidf: TfIdfScorer,
    similarity: SimilarityScorer,
    exact_match: ExactMatchScorer,
}

impl CompositeRanker {
    /// Create a ranker. The configuration is validated.
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;

        Ok(CompositeRanker {
            corpus_builder: CorpusBuilder::new().with_institutions(config.institutions),
            bm25: Bm25Scorer::new(config.bm25),
            tfidf: TfIdfScorer::new(),
            similarity: SimilarityScorer::new().with_institutions(config.institutions),
            exact_match: ExactMatchScorer::new().with_institutions(config.institutions),
            config,
        })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn corpus_builder(&self) -> &CorpusBuilder {
        &self.corpus_builder
    }

    /// The scorers with their configured weights, in breakdown order.
    pub fn signals(&self) -> Vec<(&dyn Scorer, f64)> {
        let weights = &self.config.weights;
        vec![
            (&self.bm25 as &dyn Scorer, weights.bm25),
            (&self.tfidf as &dyn Scorer, weights.tfidf),
            (&self.similarity as &dyn Scorer, weights.similarity),
            (&self.exact_match as &dyn Scorer, weights.exact_match),
        ]
    }

    /// Build a scoring query using the ranker's analyzer.
    pub fn scoring_query(&self, terms: BTreeSet<String>, raw_query: &str) -> ScoringQuery {
        ScoringQuery::new(terms, raw_query, self.corpus_builder.analyzer())
    }

    /// Build documents for `records` and rank them.
    pub fn rank_records(
        &self,
        records: Vec<CandidateRecord>,
        terms: BTreeSet<String>,
        raw_query: &str,
        top_k: usize,
    ) -> Vec<RankedCandidate> {
        let documents = self.corpus_builder.build_all(records);
        self.rank(documents, terms, raw_query, top_k)
    }

    /// Rank documents against the term set and raw query, returning at most
    /// `top_k` candidates.
    pub fn rank(
        &self,
        documents: Vec<CandidateDocument>,
        terms: BTreeSet<String>,
        raw_query: &str,
        top_k: usize,
    ) -> Vec<RankedCandidate> {
        let documents = dedup_documents(documents);
        if documents.is_empty() {
            debug!("No candidates to rank");
            return Vec::new();
        }

        let query = self.scoring_query(terms, raw_query);
        let context = ScoringContext::new(&documents, &query);

        let raw = self.compute_signals(&context);
        let normalized = raw.normalized();

        let mut ranked: Vec<RankedCandidate> = documents
            .into_iter()
            .map(|doc| {
                let breakdown = ScoreBreakdown::new(
                    normalized.scores_for(&doc.id),
                    raw.scores_for(&doc.id),
                    &self.config.weights,
                );
                RankedCandidate {
                    candidate: doc.record,
                    relevance_score: breakdown.composite,
                    score_breakdown: breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(top_k);

        info!("Returning top {} candidates", ranked.len());
        ranked
    }

    /// Run all four scorers over the context.
    pub fn compute_signals(&self, context: &ScoringContext<'_>) -> SignalMaps {
        if self.config.parallel {
            let ((bm25, tfidf), (similarity, exact_match)) = rayon::join(
                || {
                    rayon::join(
                        || run_scorer(&self.bm25, context),
                        || run_scorer(&self.tfidf, context),
                    )
                },
                || {
                    rayon::join(
                        || run_scorer(&self.similarity, context),
                        || run_scorer(&self.exact_match, context),
                    )
                },
            );
            SignalMaps {
                bm25,
                tfidf,
                similarity,
                exact_match,
            }
        } else {
            SignalMaps {
                bm25: run_scorer(&self.bm25, context),
                tfidf: run_scorer(&self.tfidf, context),
                similarity: run_scorer(&self.similarity, context),
                exact_match: run_scorer(&self.exact_match, context),
            }
        }
    }
}

fn run_scorer(scorer: &dyn Scorer, context: &ScoringContext<'_>) -> ScoreMap {
    debug!(
        "Calculating {} scores for {} candidates",
        scorer.name(),
        context.documents.len()
    );
    scorer.score(context)
}

/// Keep the first document for each identifier.
fn dedup_documents(documents: Vec<CandidateDocument>) -> Vec<CandidateDocument> {
    let mut seen = AHashSet::new();
    documents
        .into_iter()
        .filter(|doc| {
            let first = seen.insert(doc.id.clone());
            if !first {
                warn!("Skipping duplicate candidate id {}", doc.id);
            }
            first
        })
        .collect()
}
