//! Okapi BM25 scorer.

use serde::{Deserialize, Serialize};

use crate::scoring::stats::{CollectionStats, DocumentStats};
use crate::scoring::{ScoreMap, Scorer, ScoringContext};

/// BM25 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term frequency saturation.
    pub k1: f64,

    /// Document length normalization.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.5, b: 0.75 }
    }
}

/// BM25 scorer.
///
/// For each query term present in a document:
///
/// ```text
/// idf = ln((N - df + 0.5) / (df + 0.5))
/// tf  = count * (k1 + 1) / (count + k1 * (1 - b + b * len / avg_len))
/// ```
///
/// and the document score is the sum of `idf * tf`. The IDF is not clamped,
/// so a term found in most documents contributes negatively.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bm25Scorer {
    params: Bm25Params,
}

impl Bm25Scorer {
    pub fn new(params: Bm25Params) -> Self {
        Bm25Scorer { params }
    }

    pub fn params(&self) -> Bm25Params {
        self.params
    }

    pub fn score_document(
        &self,
        doc_stats: &DocumentStats,
        collection_stats: &CollectionStats,
        lookup_terms: &[String],
    ) -> f64 {
        if doc_stats.length == 0 || collection_stats.avg_doc_length == 0.0 {
            return 0.0;
        }

        let Bm25Params { k1, b } = self.params;
        let total_docs = collection_stats.total_docs as f64;
        let doc_len = doc_stats.length as f64;
        let length_norm = 1.0 - b + b * (doc_len / collection_stats.avg_doc_length);
        let mut score = 0.0;

        for term in lookup_terms {
            let tf = doc_stats.term_frequency(term);
            if tf == 0 {
                continue;
            }
            let df = collection_stats.document_frequency(term) as f64;
            if df == 0.0 {
                continue;
            }

            let idf = ((total_docs - df + 0.5) / (df + 0.5)).ln();
            let tf = tf as f64;
            let tf_component = (tf * (k1 + 1.0)) / (tf + k1 * length_norm);
            score += idf * tf_component;
        }

        score
    }
}

impl Scorer for Bm25Scorer {
    fn score(&self, context: &ScoringContext<'_>) -> ScoreMap {
        let lookup_terms = context.query.lookup_terms();

        context
            .iter()
            .map(|(doc, doc_stats)| {
                let score = self.score_document(doc_stats, &context.stats, lookup_terms);
                (doc.id.clone(), score)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "bm25"
    }

    fn description(&self) -> &str {
        "Okapi BM25 probabilistic relevance with length normalization"
    }
}
