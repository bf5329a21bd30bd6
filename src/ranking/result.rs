//! Ranked candidates and their score breakdowns.

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::ranking::config::SignalWeights;

/// One value per ranking signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    pub bm25: f64,
    pub tfidf: f64,
    pub similarity: f64,
    pub exact_match: f64,
}

impl SignalScores {
    /// Weighted sum of the signals.
    pub fn weighted_sum(&self, weights: &SignalWeights) -> f64 {
        weights.bm25 * self.bm25
            + weights.tfidf * self.tfidf
            + weights.similarity * self.similarity
            + weights.exact_match * self.exact_match
    }
}

/// Normalized signals, the composite score, and the raw signals they came
/// from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub bm25: f64,
    pub tfidf: f64,
    pub similarity: f64,
    pub exact_match: f64,
    pub composite: f64,
    /// Scores before normalization
    pub raw: SignalScores,
}

impl ScoreBreakdown {
    pub fn new(normalized: SignalScores, raw: SignalScores, weights: &SignalWeights) -> Self {
        ScoreBreakdown {
            bm25: normalized.bm25,
            tfidf: normalized.tfidf,
            similarity: normalized.similarity,
            exact_match: normalized.exact_match,
            composite: normalized.weighted_sum(weights),
            raw,
        }
    }

    /// The normalized signals.
    pub fn normalized(&self) -> SignalScores {
        SignalScores {
            bm25: self.bm25,
            tfidf: self.tfidf,
            similarity: self.similarity,
            exact_match: self.exact_match,
        }
    }
}

/// A candidate with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: CandidateRecord,
    pub relevance_score: f64,
    pub score_breakdown: ScoreBreakdown,
}

impl RankedCandidate {
    /// The candidate identifier. Ranked candidates always carry one.
    pub fn id(&self) -> &str {
        self.candidate.id().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_composite() {
        let normalized = SignalScores {
            bm25: 1.0,
            tfidf: 0.5,
            similarity: 0.0,
            exact_match: 1.0,
        };
        let breakdown = ScoreBreakdown::new(normalized, SignalScores::default(), &SignalWeights::default());

        assert!((breakdown.composite - (0.35 + 0.125 + 0.15)).abs() < 1e-12);
        assert_eq!(breakdown.normalized(), normalized);
    }

    #[test]
    fn test_breakdown_json_keys() {
        let breakdown = ScoreBreakdown::default();
        let json = serde_json::to_value(breakdown).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["bm25", "composite", "exact_match", "raw", "similarity", "tfidf"]
        );
        assert!(object["raw"].get("bm25").is_some());
    }
}
