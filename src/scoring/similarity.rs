//! Fuzzy similarity between the raw query and a candidate's fields.

use ahash::AHashSet;

use crate::candidate::CandidateDocument;
use crate::scoring::{ScoreMap, Scorer, ScoringContext};
use crate::util::sequence_matcher;

/// Similarity of an exact match after trimming and lowercasing.
pub const EXACT_SIMILARITY: f64 = 1.0;

/// Similarity when one string contains the other.
pub const SUBSTRING_SIMILARITY: f64 = 0.8;

/// Fuzzy similarity of two strings in `[0, 1]`.
///
/// Both strings are trimmed and lowercased. A blank input scores 0.0, equal
/// strings score 1.0, and a substring relation scores 0.8. Otherwise the
/// result is the larger of the character sequence ratio and the Jaccard
/// index of the whitespace-separated word sets.
///
/// # Examples
///
/// ```
/// use talentscout::scoring::fuzzy_similarity;
///
/// assert_eq!(fuzzy_similarity("Python", " python "), 1.0);
/// assert_eq!(fuzzy_similarity("python", "python developer"), 0.8);
/// assert_eq!(fuzzy_similarity("", "python"), 0.0);
/// ```
pub fn fuzzy_similarity(s1: &str, s2: &str) -> f64 {
    let s1 = s1.trim().to_lowercase();
    let s2 = s2.trim().to_lowercase();

    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return EXACT_SIMILARITY;
    }
    if s1.contains(&s2) || s2.contains(&s1) {
        return SUBSTRING_SIMILARITY;
    }

    let sequence_ratio = sequence_matcher::ratio(&s1, &s2);
    sequence_ratio.max(token_jaccard(&s1, &s2))
}

/// Jaccard index of the whitespace-separated word sets, 0.0 if either is empty.
pub fn token_jaccard(s1: &str, s2: &str) -> f64 {
    let tokens1: AHashSet<&str> = s1.split_whitespace().collect();
    let tokens2: AHashSet<&str> = s2.split_whitespace().collect();

    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let intersection = tokens1.intersection(&tokens2).count();
    let union = tokens1.union(&tokens2).count();
    intersection as f64 / union as f64
}

/// Scores each candidate by the best fuzzy match of the raw query against
/// its name, description, summary, text corpus, each skill, each technology
/// and, when enabled, each institution name.
///
/// Taking the maximum over many short fields favours recall: a one-word
/// query equal to a single skill scores 1.0 however weak the rest of the
/// record is.
#[derive(Clone, Copy, Debug)]
pub struct SimilarityScorer {
    include_institutions: bool,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        SimilarityScorer {
            include_institutions: true,
        }
    }

    pub fn with_institutions(mut self, include: bool) -> Self {
        self.include_institutions = include;
        self
    }

    /// Best similarity of `query` against the document's fields.
    pub fn score_document(&self, query: &str, doc: &CandidateDocument) -> f64 {
        let record = &doc.record;

        let mut fields: Vec<&str> = Vec::new();
        fields.extend(record.name.as_deref());
        fields.extend(record.description.as_deref());
        fields.extend(record.summary.as_deref());
        fields.push(&doc.text_corpus);
        fields.extend(record.skills.iter().map(String::as_str));
        fields.extend(record.technologies.iter().map(String::as_str));
        if self.include_institutions {
            fields.extend(record.institution_names());
        }

        fields
            .into_iter()
            .map(|field| fuzzy_similarity(query, field))
            .fold(0.0, f64::max)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for SimilarityScorer {
    fn score(&self, context: &ScoringContext<'_>) -> ScoreMap {
        let query = context.query.raw_query().to_lowercase();

        context
            .documents
            .iter()
            .map(|doc| (doc.id.clone(), self.score_document(&query, doc)))
            .collect()
    }

    fn name(&self) -> &str {
        "similarity"
    }

    fn description(&self) -> &str {
        "Maximum fuzzy string similarity between the query and candidate fields"
    }
}
