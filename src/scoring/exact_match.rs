//! Exact and partial match bonuses.

use crate::candidate::CandidateDocument;
use crate::scoring::{ScoreMap, Scorer, ScoringContext};

/// Bonus when a term equals the candidate's primary location.
pub const LOCATION_BONUS: f64 = 10.0;

/// Bonus for each institution whose name equals a term.
pub const INSTITUTION_BONUS: f64 = 8.0;

/// Bonus when a term occurs as a whole word in the corpus.
pub const WHOLE_WORD_BONUS: f64 = 2.0;

/// Bonus when a term occurs only as a substring of the corpus.
pub const PARTIAL_BONUS: f64 = 1.0;

/// Sums fixed bonuses per lowercased query term.
///
/// Matching is done on the lowercased text corpus, not on processed tokens,
/// so multi-word terms such as "new york" can match.
#[derive(Clone, Copy, Debug)]
pub struct ExactMatchScorer {
    include_institutions: bool,
}

impl ExactMatchScorer {
    pub fn new() -> Self {
        ExactMatchScorer {
            include_institutions: true,
        }
    }

    pub fn with_institutions(mut self, include: bool) -> Self {
        self.include_institutions = include;
        self
    }

    pub fn score_document(&self, doc: &CandidateDocument, lowercase_terms: &[String]) -> f64 {
        let corpus = doc.text_corpus.to_lowercase();
        let padded_corpus = format!(" {corpus} ");
        let location = doc
            .record
            .primary_location()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let institutions: Vec<String> = if self.include_institutions {
            doc.record
                .institution_names()
                .map(str::to_lowercase)
                .filter(|name| !name.is_empty())
                .collect()
        } else {
            Vec::new()
        };

        let mut bonus = 0.0;
        for term in lowercase_terms {
            if !location.is_empty() && *term == location {
                bonus += LOCATION_BONUS;
            }

            bonus += INSTITUTION_BONUS
                * institutions.iter().filter(|name| *name == term).count() as f64;

            if padded_corpus.contains(&format!(" {term} ")) {
                bonus += WHOLE_WORD_BONUS;
            } else if corpus.contains(term.as_str()) {
                bonus += PARTIAL_BONUS;
            }
        }

        bonus
    }
}

impl Default for ExactMatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for ExactMatchScorer {
    fn score(&self, context: &ScoringContext<'_>) -> ScoreMap {
        let terms = context.query.lowercase_terms();

        context
            .documents
            .iter()
            .map(|doc| (doc.id.clone(), self.score_document(doc, terms)))
            .collect()
    }

    fn name(&self) -> &str {
        "exact_match"
    }

    fn description(&self) -> &str {
        "Bonuses for location, institution, whole-word and partial matches"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{CandidateRecord, CorpusBuilder, Institution};

    fn terms(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    fn document(record: CandidateRecord) -> CandidateDocument {
        CorpusBuilder::new().build(record).unwrap()
    }

    #[test]
    fn test_whole_word_and_partial() {
        let doc = document(CandidateRecord::new("a").with_description("Python developer, AWS"));
        let scorer = ExactMatchScorer::new();

        assert_eq!(scorer.score_document(&doc, &terms(&["python"])), 2.0);
        // "aws" is followed by nothing but the padding, "develop" is only a prefix.
        assert_eq!(scorer.score_document(&doc, &terms(&["aws"])), 2.0);
        assert_eq!(scorer.score_document(&doc, &terms(&["develop"])), 1.0);
        // "developer," carries a comma so it is not a whole word.
        assert_eq!(scorer.score_document(&doc, &terms(&["developer"])), 1.0);
        assert_eq!(scorer.score_document(&doc, &terms(&["rust"])), 0.0);
    }

    #[test]
    fn test_primary_location_bonus() {
        let doc = document(
            CandidateRecord::new("a")
                .with_location("New York")
                .with_location("Boston"),
        );
        let scorer = ExactMatchScorer::new();

        // Location bonus plus whole-word bonus from the corpus
        assert_eq!(scorer.score_document(&doc, &terms(&["new york"])), 12.0);
        // Only the first location earns the location bonus
        assert_eq!(scorer.score_document(&doc, &terms(&["boston"])), 2.0);
    }

    #[test]
    fn test_institution_bonus() {
        let mut record = CandidateRecord::new("a");
        record.institutions.push(Institution {
            name: Some("MIT".to_string()),
            kind: None,
        });
        let doc = document(record);

        assert_eq!(
            ExactMatchScorer::new().score_document(&doc, &terms(&["mit"])),
            10.0
        );
        assert_eq!(
            ExactMatchScorer::new()
                .with_institutions(false)
                .score_document(&doc, &terms(&["mit"])),
            2.0
        );
    }

    #[test]
    fn test_no_terms() {
        let doc = document(CandidateRecord::new("a").with_location("Austin"));
        assert_eq!(ExactMatchScorer::new().score_document(&doc, &[]), 0.0);
    }
}
