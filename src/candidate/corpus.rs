//! Corpus construction for candidate records.
//!
//! Every textual field of a record is flattened into a single space-joined
//! string (the text corpus) in a fixed order:
//!
//! 1. name, description, summary
//! 2. skills, then technologies
//! 3. company names
//! 4. each project's name, description and technologies
//! 5. each publication's title, description and keywords
//! 6. each achievement's title and description
//! 7. courses, education entries, locations
//! 8. institution names, when institutions are enabled
//!
//! Empty fragments are skipped. The corpus is then passed through the
//! [`EnglishAnalyzer`] to produce the processed tokens.

use serde::Serialize;

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::candidate::record::CandidateRecord;

/// A candidate prepared for one ranking pass.
///
/// Documents are built fresh for every search and are read-only afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateDocument {
    /// Unique candidate identifier
    pub id: String,
    /// The underlying record
    pub record: CandidateRecord,
    /// All textual fields joined by single spaces
    pub text_corpus: String,
    /// Normalized tokens of `text_corpus`, in order
    #[serde(skip)]
    pub tokens: Vec<String>,
}

impl CandidateDocument {
    /// Number of processed tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no processed tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Builds [`CandidateDocument`]s from records.
#[derive(Clone, Debug)]
pub struct CorpusBuilder {
    analyzer: EnglishAnalyzer,
    include_institutions: bool,
}

impl CorpusBuilder {
    /// Create a builder that includes institution names.
    pub fn new() -> Self {
        CorpusBuilder {
            analyzer: EnglishAnalyzer::new(),
            include_institutions: true,
        }
    }

    /// Enable or disable institution names in the corpus.
    pub fn with_institutions(mut self, include: bool) -> Self {
        self.include_institutions = include;
        self
    }

    /// Whether institution names are part of the corpus.
    pub fn includes_institutions(&self) -> bool {
        self.include_institutions
    }

    /// The analyzer used for the processed tokens.
    pub fn analyzer(&self) -> &EnglishAnalyzer {
        &self.analyzer
    }

    /// Collect the non-empty text fragments of a record in corpus order.
    pub fn fragments<'a>(&self, record: &'a CandidateRecord) -> Vec<&'a str> {
        let mut parts: Vec<&str> = Vec::new();

        parts.extend(record.name.as_deref());
        parts.extend(record.description.as_deref());
        parts.extend(record.summary.as_deref());

        parts.extend(record.skills.iter().map(String::as_str));
        parts.extend(record.technologies.iter().map(String::as_str));

        parts.extend(record.companies.iter().filter_map(|c| c.name.as_deref()));

        for project in &record.projects {
            parts.extend(project.name.as_deref());
            parts.extend(project.description.as_deref());
            parts.extend(project.technologies.iter().map(String::as_str));
        }

        for publication in &record.publications {
            parts.extend(publication.title.as_deref());
            parts.extend(publication.description.as_deref());
            parts.extend(publication.keywords.iter().map(String::as_str));
        }

        for achievement in &record.achievements {
            parts.extend(achievement.title.as_deref());
            parts.extend(achievement.description.as_deref());
        }

        parts.extend(record.courses.iter().map(String::as_str));
        parts.extend(record.education.iter().map(String::as_str));
        parts.extend(record.locations.iter().map(String::as_str));

        if self.include_institutions {
            parts.extend(record.institution_names());
        }

        parts.retain(|part| !part.is_empty());
        parts
    }

    /// Build the text corpus and processed tokens of a record.
    pub fn build_corpus(&self, record: &CandidateRecord) -> (String, Vec<String>) {
        let text_corpus = self.fragments(record).join(" ");
        let tokens = self.analyzer.normalize(&text_corpus);
        (text_corpus, tokens)
    }

    /// Build a document, or `None` when the record has no identifier.
    pub fn build(&self, record: CandidateRecord) -> Option<CandidateDocument> {
        let id = record.id()?.to_string();
        let (text_corpus, tokens) = self.build_corpus(&record);

        Some(CandidateDocument {
            id,
            record,
            text_corpus,
            tokens,
        })
    }

    /// Build documents for all records that carry an identifier, preserving
    /// their order.
    pub fn build_all(&self, records: Vec<CandidateRecord>) -> Vec<CandidateDocument> {
        records
            .into_iter()
            .filter_map(|record| self.build(record))
            .collect()
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}
