//! Structured query parameters.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::candidate::lenient;
use crate::error::{Result, ScoutError};

/// Structured parameters extracted from a free-text recruiter query.
///
/// Every list defaults to empty, and values of the wrong JSON shape are
/// read as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParameters {
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub companies: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub institutions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_terms: Vec<String>,
    #[serde(
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_level: Option<String>,
}

impl QueryParameters {
    /// The fallback parameters used when extraction fails: the query split on
    /// whitespace as key terms and nothing else.
    pub fn degraded(query: &str) -> Self {
        QueryParameters {
            key_terms: query.split_whitespace().map(str::to_string).collect(),
            ..Default::default()
        }
    }

    /// Parse parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ScoutError::extraction(
                "query parameters must be a JSON object",
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Load parameters from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// The first non-blank location, used as the candidate pre-filter.
    pub fn primary_location(&self) -> Option<&str> {
        self.locations
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
    }

    /// The raw term set: key terms plus skills, locations, companies,
    /// institutions and roles.
    ///
    /// Terms are trimmed and blank terms are discarded. The set is ordered so
    /// that scorers sum contributions in a reproducible order.
    pub fn terms(&self) -> BTreeSet<String> {
        self.key_terms
            .iter()
            .chain(&self.skills)
            .chain(&self.locations)
            .chain(&self.companies)
            .chain(&self.institutions)
            .chain(&self.roles)
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded() {
        let params = QueryParameters::degraded("  Python   AWS engineer ");
        assert_eq!(params.key_terms, vec!["Python", "AWS", "engineer"]);
        assert!(params.skills.is_empty());
        assert!(params.locations.is_empty());
        assert_eq!(params.experience_level, None);
    }

    #[test]
    fn test_terms_union() {
        let params = QueryParameters {
            skills: vec!["python".into(), "aws".into()],
            locations: vec!["New York".into()],
            roles: vec!["engineer".into(), " ".into()],
            key_terms: vec!["python".into(), "".into()],
            ..Default::default()
        };

        let terms: Vec<_> = params.terms().into_iter().collect();
        assert_eq!(terms, vec!["New York", "aws", "engineer", "python"]);
    }

    #[test]
    fn test_from_json_lenient() {
        let params = QueryParameters::from_json(
            r#"{"skills": ["Rust", 3], "locations": "Berlin", "experience_level": "senior", "extra": 1}"#,
        )
        .unwrap();

        assert_eq!(params.skills, vec!["Rust"]);
        assert!(params.locations.is_empty());
        assert_eq!(params.experience_level.as_deref(), Some("senior"));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(QueryParameters::from_json("[1, 2]").is_err());
        assert!(QueryParameters::from_json("not json").is_err());
    }

    #[test]
    fn test_primary_location() {
        let params = QueryParameters {
            locations: vec!["  ".into(), "Austin".into(), "Boston".into()],
            ..Default::default()
        };
        assert_eq!(params.primary_location(), Some("Austin"));
        assert_eq!(QueryParameters::default().primary_location(), None);
    }
}
