//! Composite ranking.
//!
//! The [`CompositeRanker`] fuses the four relevance signals of
//! [`crate::scoring`] into one score per candidate, configured by a
//! [`RankingConfig`].

pub mod config;
pub mod ranker;
pub mod result;

pub use config::{RankingConfig, SignalWeights};
pub use ranker::{CompositeRanker, SignalMaps};
pub use result::{RankedCandidate, ScoreBreakdown, SignalScores};
