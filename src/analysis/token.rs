//! The unit of text flowing through the analysis pipeline.
//!
//! ```
//! use talentscout::analysis::token::Token;
//!
//! let token = Token::new("Python");
//! assert_eq!(token.map_text(|text| text.to_lowercase()).text, "python");
//! ```

use std::fmt;

/// A word produced by a tokenizer and rewritten or dropped by filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Length of the text in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text with `f` applied to it.
    pub fn map_text<F: FnOnce(&str) -> String>(self, f: F) -> Self {
        Token {
            text: f(&self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The tokens flowing between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Build a stream from words, mostly for feeding filters directly.
pub fn token_stream<I, S>(words: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<Token> = words.into_iter().map(Token::new).collect();
    Box::new(tokens.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(Token::new("résumé").char_len(), 6);
        assert_eq!(Token::new("").char_len(), 0);
    }

    #[test]
    fn test_map_text() {
        let token = Token::new("Engineers").map_text(|text| text.to_uppercase());
        assert_eq!(token, Token::new("ENGINEERS"));
        assert_eq!(token.to_string(), "ENGINEERS");
    }

    #[test]
    fn test_token_stream() {
        let texts: Vec<String> = token_stream(["rust", "go"]).map(|t| t.text).collect();
        assert_eq!(texts, vec!["rust", "go"]);
    }
}
