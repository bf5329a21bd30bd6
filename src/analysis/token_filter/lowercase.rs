//! Case folding for tokens.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases every token with full Unicode case mapping.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.map(|token| token.map_text(str::to_lowercase)),
        ))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::token_stream;

    #[test]
    fn test_lowercase_filter() {
        let result: Vec<String> = LowercaseFilter::new()
            .filter(token_stream(["Python", "AWS", "ÉCOLE", "rust"]))
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(result, vec!["python", "aws", "école", "rust"]);
    }
}
