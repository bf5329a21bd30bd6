//! Text analysis for candidate corpora and query terms.
//!
//! Text flows through a tokenizer and then a chain of token filters:
//!
//! ```text
//! Tokenizer → Lowercase → Alphanumeric → Stop Words → Min Length → Stemmer
//! ```
//!
//! [`analyzer::english::EnglishAnalyzer`] wires that chain together and is the
//! text normalizer every scorer relies on.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
