//! TF-IDF scorer.

use crate::scoring::stats::{CollectionStats, DocumentStats};
use crate::scoring::{ScoreMap, Scorer, ScoringContext};

/// TF-IDF with log-scaled term frequency: `(1 + ln tf) * ln(N / df)`,
/// summed over query terms present in the document.
#[derive(Clone, Copy, Debug, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn new() -> Self {
        TfIdfScorer
    }

    /// Score one document against the stemmed lookup terms.
    pub fn score_document(
        doc_stats: &DocumentStats,
        collection_stats: &CollectionStats,
        lookup_terms: &[String],
    ) -> f64 {
        if doc_stats.length == 0 {
            return 0.0;
        }

        let total_docs = collection_stats.total_docs as f64;
        let mut score = 0.0;

        for term in lookup_terms {
            let tf = doc_stats.term_frequency(term);
            if tf == 0 {
                continue;
            }
            let df = collection_stats.document_frequency(term);
            if df == 0 {
                continue;
            }

            let tf_component = 1.0 + (tf as f64).ln();
            let idf = (total_docs / df as f64).ln();
            score += tf_component * idf;
        }

        score
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, context: &ScoringContext<'_>) -> ScoreMap {
        let lookup_terms = context.query.lookup_terms();

        context
            .iter()
            .map(|(doc, doc_stats)| {
                let score = Self::score_document(doc_stats, &context.stats, lookup_terms);
                (doc.id.clone(), score)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn description(&self) -> &str {
        "Log-scaled term frequency times inverse document frequency"
    }
}
