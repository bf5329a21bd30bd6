//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream, rewriting tokens (lowercasing, stemming) or dropping them (stop
//! words, short or non-alphanumeric tokens).
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphanumeric::AlphanumericFilter`] - Drops tokens with non-alphanumeric characters
//! - [`stop::StopFilter`] - Removes stop words
//! - [`length::MinLengthFilter`] - Drops tokens at or below a length threshold
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use talentscout::analysis::token_filter::Filter;
//! use talentscout::analysis::token_filter::lowercase::LowercaseFilter;
//! use talentscout::analysis::token::token_stream;
//!
//! let filter = LowercaseFilter::new();
//! let filtered: Vec<_> = filter.filter(token_stream(["Hello", "WORLD"]))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod length;
pub mod lowercase;
pub mod stem;
pub mod stop;
