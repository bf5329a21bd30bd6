//! Error types for the talentscout library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ScoutError`] enum. Ranking itself is pure computation and never fails;
//! errors come from loading configuration, reading candidate files, and the
//! external query-parameter extraction step.
//!
//! # Examples
//!
//! ```
//! use talentscout::error::{Result, ScoutError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ScoutError::invalid_argument("top_k must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for talentscout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// I/O errors (candidate files, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (invalid weights, bad parameters)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Candidate source errors
    #[error("Source error: {0}")]
    Source(String),

    /// Query parameter extraction errors
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// A requested candidate does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ScoutError.
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ScoutError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ScoutError::Analysis(msg.into())
    }

    /// Create a new candidate source error.
    pub fn source<S: Into<String>>(msg: S) -> Self {
        ScoutError::Source(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        ScoutError::Extraction(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ScoutError::Source(msg.into()) // Parse errors come from candidate input
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ScoutError::NotFound(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ScoutError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ScoutError::Other(msg.into())
    }
}
