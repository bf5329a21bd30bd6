//! # talentscout
//!
//! Multi-signal relevance ranking for candidate profiles.
//!
//! Given a free-text recruiter query and a collection of candidate records,
//! talentscout builds a normalized text corpus per candidate, expands the
//! query terms through synonym tables, and ranks candidates by a weighted
//! fusion of four signals:
//!
//! - BM25
//! - TF-IDF
//! - fuzzy string similarity
//! - exact-match bonuses
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use talentscout::candidate::{CandidateRecord, InMemoryCandidateSource};
//! use talentscout::engine::SearchEngine;
//! use talentscout::ranking::RankingConfig;
//!
//! let source = InMemoryCandidateSource::new(vec![
//!     CandidateRecord::new("a").with_description("Senior Python engineer"),
//!     CandidateRecord::new("b").with_description("Junior Java developer"),
//! ]);
//! let engine = SearchEngine::new(Arc::new(source), RankingConfig::default()).unwrap();
//!
//! let response = engine.search("python engineer", Some(1)).unwrap();
//! assert_eq!(response.results[0].id(), "a");
//! ```

pub mod analysis;
pub mod candidate;
pub mod cli;
pub mod engine;
pub mod error;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
