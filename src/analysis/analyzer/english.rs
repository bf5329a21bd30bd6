//! English analyzer used for candidate corpora and query terms.
//!
//! The pipeline is:
//!
//! 1. [`UnicodeWordTokenizer`] splits on UAX #29 word boundaries
//! 2. [`LowercaseFilter`]
//! 3. [`AlphanumericFilter`] drops tokens such as `node.js` or `c++`
//! 4. [`StopFilter`] with the default English list
//! 5. [`MinLengthFilter`] drops tokens of two characters or fewer
//! 6. [`StemFilter`] with the Porter stemmer
//!
//! # Examples
//!
//! ```
//! use talentscout::analysis::analyzer::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new();
//! assert_eq!(
//!     analyzer.normalize("Senior Python engineers with AWS"),
//!     vec!["senior", "python", "engin", "aw"]
//! );
//! assert_eq!(analyzer.normalize_term("Engineering"), "engin");
//! ```

use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::length::MinLengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{PorterStemmer, StemFilter, Stemmer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Analyzer producing the normalized token list of a text.
#[derive(Clone, Debug)]
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
    stemmer: PorterStemmer,
}

impl EnglishAnalyzer {
    /// Create the analyzer with the default English configuration.
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("english");

        EnglishAnalyzer {
            inner,
            stemmer: PorterStemmer::new(),
        }
    }

    /// Normalize a text into its token list, preserving token order.
    ///
    /// Empty input yields an empty list. None of the filters in this
    /// pipeline can fail, but an error is logged and treated as no tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        match self.inner.analyze(text) {
            Ok(tokens) => tokens.map(|token| token.text).collect(),
            Err(e) => {
                warn!("Failed to analyze text: {e}");
                Vec::new()
            }
        }
    }

    /// Reduce a query term to its lookup form: lowercased, then stemmed.
    ///
    /// Stop words and short terms are kept, and multi-word terms stay a
    /// single string.
    pub fn normalize_term(&self, term: &str) -> String {
        self.stemmer.stem(&term.to_lowercase())
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_filters_and_stems() {
        let analyzer = EnglishAnalyzer::new();
        let tokens = analyzer.normalize("The Senior Engineers are building ML pipelines in Go");

        assert_eq!(tokens, vec!["senior", "engin", "build", "pipelin"]);
    }

    #[test]
    fn test_normalize_drops_compound_tokens() {
        let analyzer = EnglishAnalyzer::new();
        let tokens = analyzer.normalize("node.js developer, C++ expert");

        assert_eq!(tokens, vec!["develop", "expert"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        let analyzer = EnglishAnalyzer::new();
        assert!(analyzer.normalize("").is_empty());
        assert!(analyzer.normalize("   \n\t").is_empty());
        assert!(analyzer.normalize("a an the").is_empty());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let analyzer = EnglishAnalyzer::new();
        let text = "Distributed systems engineer; Kubernetes, Terraform and AWS.";
        assert_eq!(analyzer.normalize(text), analyzer.normalize(text));
    }

    #[test]
    fn test_normalize_term() {
        let analyzer = EnglishAnalyzer::new();
        assert_eq!(analyzer.normalize_term("Python"), "python");
        assert_eq!(analyzer.normalize_term("AWS"), "aw");
        assert_eq!(analyzer.normalize_term("ml"), "ml");
        assert_eq!(analyzer.normalize_term("the"), "the");
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = EnglishAnalyzer::new();
        assert_eq!(Analyzer::name(&analyzer), "english");
        assert_eq!(analyzer.inner().filters().len(), 5);
    }
}
