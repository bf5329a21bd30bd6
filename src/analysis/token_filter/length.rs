//! Minimum length filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops tokens whose character length is at or below a
/// threshold.
///
/// With the default threshold of 2, only tokens of three or more characters
/// survive, so fragments like "js", "ml" or "go" never enter the corpus
/// statistics.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    /// Tokens with `char_len() <= max_dropped_len` are removed
    max_dropped_len: usize,
}

impl MinLengthFilter {
    /// Create a filter that drops tokens of length two or less.
    pub fn new() -> Self {
        Self::dropping_up_to(2)
    }

    /// Create a filter that drops tokens of length `len` or less.
    pub fn dropping_up_to(len: usize) -> Self {
        MinLengthFilter {
            max_dropped_len: len,
        }
    }

    /// The largest token length that is removed.
    pub fn max_dropped_len(&self) -> usize {
        self.max_dropped_len
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let max = self.max_dropped_len;
        Ok(Box::new(tokens.filter(move |token| token.char_len() > max)))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
