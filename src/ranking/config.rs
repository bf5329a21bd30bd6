//! Configuration for candidate ranking.
//!
//! # Examples
//!
//! ```
//! use talentscout::ranking::RankingConfig;
//!
//! let config = RankingConfig::default();
//! assert_eq!(config.weights.bm25, 0.35);
//! assert_eq!(config.default_top_k, 20);
//! assert!(config.validate().is_ok());
//!
//! let mut custom = RankingConfig::default();
//! custom.weights.bm25 = 0.5; // weights no longer sum to 1.0
//! assert!(custom.validate().is_err());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};
use crate::scoring::Bm25Params;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights of the four normalized signals in the composite score.
///
/// The defaults are the standard mix of 0.35 BM25, 0.25 TF-IDF, 0.25
/// similarity and 0.15 exact match. Any other mix is an extension and changes
/// rankings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub bm25: f64,
    pub tfidf: f64,
    pub similarity: f64,
    pub exact_match: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        SignalWeights {
            bm25: 0.35,
            tfidf: 0.25,
            similarity: 0.25,
            exact_match: 0.15,
        }
    }
}

impl SignalWeights {
    pub fn sum(&self) -> f64 {
        self.bm25 + self.tfidf + self.similarity + self.exact_match
    }

    /// Check that every weight is finite and non-negative, and that they sum
    /// to 1.0.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("bm25", self.bm25),
            ("tfidf", self.tfidf),
            ("similarity", self.similarity),
            ("exact_match", self.exact_match),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoutError::config(format!(
                    "weight {name} must be a non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoutError::config(format!(
                "signal weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

/// Configuration for a ranking pass and the search engine around it.
///
/// `RankingConfig::default()` reproduces the standard ranking exactly. A
/// config file may override `weights` as an extension, but every override is
/// still validated to sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// BM25 parameters.
    pub bm25: Bm25Params,

    /// Composite signal weights.
    pub weights: SignalWeights,

    /// Number of results when a search does not specify one.
    pub default_top_k: usize,

    /// Whether institutions take part in the corpus, similarity, exact
    /// matching and query expansion.
    pub institutions: bool,

    /// Whether the first extracted location pre-filters the candidates.
    pub location_prefilter: bool,

    /// Run the four scorers on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            bm25: Bm25Params::default(),
            weights: SignalWeights::default(),
            default_top_k: 20,
            institutions: true,
            location_prefilter: true,
            parallel: false,
        }
    }
}

impl RankingConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values. The result is validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoutError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: RankingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !self.bm25.k1.is_finite() || self.bm25.k1 < 0.0 {
            return Err(ScoutError::config(format!(
                "bm25.k1 must be a non-negative number, got {}",
                self.bm25.k1
            )));
        }
        if !(0.0..=1.0).contains(&self.bm25.b) {
            return Err(ScoutError::config(format!(
                "bm25.b must be within [0, 1], got {}",
                self.bm25.b
            )));
        }
        if self.default_top_k == 0 {
            return Err(ScoutError::config("default_top_k must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = RankingConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(config.institutions);
        assert!(config.location_prefilter);
        assert!(!config.parallel);
    }

    #[test]
    fn test_default_weights_are_standard_mix() {
        let weights = SignalWeights::default();
        assert_eq!(
            [weights.bm25, weights.tfidf, weights.similarity, weights.exact_match],
            [0.35, 0.25, 0.25, 0.15]
        );
        assert_eq!(RankingConfig::default().weights, weights);
    }

    #[test]
    fn test_invalid_weights() {
        let mut weights = SignalWeights::default();
        weights.tfidf = -0.1;
        weights.bm25 = 0.7;
        assert!(matches!(weights.validate(), Err(ScoutError::Config(_))));

        let weights = SignalWeights {
            bm25: 0.25,
            tfidf: 0.25,
            similarity: 0.25,
            exact_match: 0.2,
        };
        assert!(weights.validate().is_err());

        let weights = SignalWeights {
            bm25: f64::NAN,
            ..SignalWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_invalid_bm25_and_top_k() {
        let mut config = RankingConfig::default();
        config.bm25.b = 1.5;
        assert!(config.validate().is_err());

        let mut config = RankingConfig::default();
        config.bm25.k1 = -1.0;
        assert!(config.validate().is_err());

        let mut config = RankingConfig::default();
        config.default_top_k = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default_top_k": 5, "bm25": {{"k1": 1.2}}, "parallel": true}}"#
        )
        .unwrap();

        let config = RankingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_top_k, 5);
        assert_eq!(config.bm25.k1, 1.2);
        assert_eq!(config.bm25.b, 0.75);
        assert!(config.parallel);
        assert_eq!(config.weights, SignalWeights::default());
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": {{"bm25": 1.0}}}}"#).unwrap();

        assert!(RankingConfig::from_file(file.path()).is_err());
        assert!(RankingConfig::from_file("/nonexistent/ranking.json").is_err());
    }
}
