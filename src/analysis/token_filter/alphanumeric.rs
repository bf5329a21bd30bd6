//! Alphanumeric filter implementation.
//!
//! Removes tokens that contain anything other than letters and digits, such
//! as `node.js` or `don't`. Those tokens never reach the term statistics.
//!
//! # Examples
//!
//! ```
//! use talentscout::analysis::token_filter::Filter;
//! use talentscout::analysis::token_filter::alphanumeric::AlphanumericFilter;
//! use talentscout::analysis::token::token_stream;
//!
//! let filter = AlphanumericFilter::new();
//! let result: Vec<_> = filter.filter(token_stream(["node.js", "rust"]))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "rust");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only purely alphanumeric tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }

    /// Check whether a word is non-empty and made only of letters and digits.
    pub fn is_alphanumeric(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphanumeric)
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.filter(|token| Self::is_alphanumeric(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::token_stream;

    #[test]
    fn test_alphanumeric_filter() {
        let filter = AlphanumericFilter::new();
        let result: Vec<String> = filter
            .filter(token_stream(["python3", "don't", "ci", ""]))
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(result, vec!["python3", "ci"]);
    }

    #[test]
    fn test_unicode_letters_are_alphanumeric() {
        assert!(AlphanumericFilter::is_alphanumeric("münchen"));
        assert!(!AlphanumericFilter::is_alphanumeric("c++"));
    }
}
