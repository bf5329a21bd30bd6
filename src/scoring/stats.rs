//! Term statistics shared by the TF-IDF and BM25 scorers.

use ahash::{AHashMap, AHashSet};

use crate::candidate::CandidateDocument;

/// Statistics for a single document.
#[derive(Clone, Debug, Default)]
pub struct DocumentStats {
    /// Number of processed tokens.
    pub length: usize,

    /// Occurrences of each token.
    pub term_frequencies: AHashMap<String, usize>,
}

impl DocumentStats {
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut term_frequencies = AHashMap::new();
        for token in tokens {
            *term_frequencies.entry(token.clone()).or_insert(0) += 1;
        }

        DocumentStats {
            length: tokens.len(),
            term_frequencies,
        }
    }

    /// Occurrences of `term` in the document.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }
}

/// Statistics over all documents of a ranking pass.
#[derive(Clone, Debug, Default)]
pub struct CollectionStats {
    /// Total number of documents.
    pub total_docs: usize,

    /// Mean token count, or 0 for an empty collection.
    pub avg_doc_length: f64,

    /// Number of documents containing each token.
    pub document_frequencies: AHashMap<String, usize>,

    /// Per-document statistics, in document order.
    pub documents: Vec<DocumentStats>,
}

impl CollectionStats {
    pub fn from_documents(documents: &[CandidateDocument]) -> Self {
        let doc_stats: Vec<DocumentStats> = documents
            .iter()
            .map(|doc| DocumentStats::from_tokens(&doc.tokens))
            .collect();

        let mut document_frequencies = AHashMap::new();
        for doc in documents {
            let unique: AHashSet<&String> = doc.tokens.iter().collect();
            for token in unique {
                *document_frequencies.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len();
        let total_length: usize = doc_stats.iter().map(|d| d.length).sum();
        let avg_doc_length = if total_docs == 0 {
            0.0
        } else {
            total_length as f64 / total_docs as f64
        };

        CollectionStats {
            total_docs,
            avg_doc_length,
            document_frequencies,
            documents: doc_stats,
        }
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }
}
