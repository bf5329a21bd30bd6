//! Candidate record types.
//!
//! A [`CandidateRecord`] is one candidate as delivered by a source. Every
//! field is optional and defaults to empty, and fields with an unexpected
//! JSON shape are read as absent (see [`super::lenient`]).
//!
//! # Examples
//!
//! ```
//! use talentscout::candidate::CandidateRecord;
//!
//! let record: CandidateRecord = serde_json::from_str(r#"{
//!     "candidate_id": "c-1",
//!     "name": "Ada",
//!     "skills": ["Python", 7],
//!     "companies": ["Acme", {"name": "Initech", "role": "company"}],
//!     "locations": "not a list"
//! }"#).unwrap();
//!
//! assert_eq!(record.id(), Some("c-1"));
//! assert_eq!(record.skills, vec!["Python"]);
//! assert_eq!(record.companies.len(), 2);
//! assert!(record.locations.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::lenient;

/// A candidate as stored in the backing source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    #[serde(alias = "id", deserialize_with = "lenient::opt_id")]
    pub candidate_id: Option<String>,

    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,

    // Contact fields are carried for display and never enter the corpus.
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub companies: Vec<CompanyRef>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub publications: Vec<Publication>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub courses: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "lenient::item_list")]
    pub institutions: Vec<Institution>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub locations: Vec<String>,
}

impl CandidateRecord {
    /// Create an empty record with the given identifier.
    pub fn new<S: Into<String>>(candidate_id: S) -> Self {
        CandidateRecord {
            candidate_id: Some(candidate_id.into()),
            ..Default::default()
        }
    }

    /// The candidate identifier, if present.
    pub fn id(&self) -> Option<&str> {
        self.candidate_id.as_deref()
    }

    /// The primary (first) location.
    pub fn primary_location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    /// Narrow the record to the locations containing `filter`, ignoring
    /// case. Returns `None` when no location matches, so the first match
    /// becomes the primary location.
    pub fn restrict_to_location(mut self, filter: &str) -> Option<Self> {
        let filter = filter.to_lowercase();
        self.locations
            .retain(|location| location.to_lowercase().contains(&filter));
        (!self.locations.is_empty()).then_some(self)
    }

    /// Names of all institutions that carry one.
    pub fn institution_names(&self) -> impl Iterator<Item = &str> {
        self.institutions.iter().filter_map(|i| i.name.as_deref())
    }

    /// Set the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the free-text description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a skill.
    pub fn with_skill<S: Into<String>>(mut self, skill: S) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Append a location.
    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.locations.push(location.into());
        self
    }
}

/// A company reference, given either as a bare name or as an object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompanyRepr")]
pub struct CompanyRef {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompanyRepr {
    Name(String),
    Detailed {
        #[serde(default, deserialize_with = "lenient::opt_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_string")]
        role: Option<String>,
    },
}

impl From<CompanyRepr> for CompanyRef {
    fn from(repr: CompanyRepr) -> Self {
        match repr {
            CompanyRepr::Name(name) => CompanyRef {
                name: Some(name),
                role: None,
            },
            CompanyRepr::Detailed { name, role } => CompanyRef { name, role },
        }
    }
}

/// An educational institution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "InstitutionRepr")]
pub struct Institution {
    pub name: Option<String>,
    /// Kind of institution (university, college, school, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InstitutionRepr {
    Name(String),
    Detailed {
        #[serde(default, deserialize_with = "lenient::opt_string")]
        name: Option<String>,
        #[serde(default, alias = "type", deserialize_with = "lenient::opt_string")]
        kind: Option<String>,
    },
}

impl From<InstitutionRepr> for Institution {
    fn from(repr: InstitutionRepr) -> Self {
        match repr {
            InstitutionRepr::Name(name) => Institution {
                name: Some(name),
                kind: None,
            },
            InstitutionRepr::Detailed { name, kind } => Institution { name, kind },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_list")]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_list")]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{
                "candidate_id": "c-7",
                "name": "Grace",
                "email": "grace@example.com",
                "projects": [
                    {"name": "Compiler", "technologies": "COBOL"},
                    "not a project",
                    {"name": "Scheduler", "technologies": ["Rust", "Tokio"]}
                ],
                "publications": [{"title": "Paper", "keywords": ["a", "b"]}],
                "institutions": ["MIT", {"name": "Harvard University", "type": "University"}],
                "locations": ["New York", "Boston"]
            }"#,
        )
        .unwrap();

        assert_eq!(record.id(), Some("c-7"));
        assert_eq!(record.email.as_deref(), Some("grace@example.com"));
        assert_eq!(record.projects.len(), 2);
        assert_eq!(record.projects[0].technologies, vec!["COBOL"]);
        assert_eq!(record.projects[1].technologies, vec!["Rust", "Tokio"]);
        assert_eq!(record.publications[0].keywords, vec!["a", "b"]);
        assert_eq!(
            record.institution_names().collect::<Vec<_>>(),
            vec!["MIT", "Harvard University"]
        );
        assert_eq!(record.institutions[1].kind.as_deref(), Some("University"));
        assert_eq!(record.primary_location(), Some("New York"));
    }

    #[test]
    fn test_id_alias_and_numeric_id() {
        let record: CandidateRecord = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(record.id(), Some("42"));
    }

    #[test]
    fn test_missing_id() {
        let record: CandidateRecord = serde_json::from_str(r#"{"name": "Nobody"}"#).unwrap();
        assert_eq!(record.id(), None);
    }

    #[test]
    fn test_company_with_bad_name() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"companies": [{"name": 5}, "Acme"]}"#).unwrap();
        assert_eq!(record.companies[0].name, None);
        assert_eq!(record.companies[1].name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_restrict_to_location() {
        let record = CandidateRecord::new("c-1")
            .with_location("Boston")
            .with_location("New York")
            .with_location("new york city");

        let narrowed = record.clone().restrict_to_location("NEW YORK").unwrap();
        assert_eq!(narrowed.locations, vec!["New York", "new york city"]);
        assert_eq!(narrowed.primary_location(), Some("New York"));

        assert!(record.restrict_to_location("Austin").is_none());
        assert!(CandidateRecord::new("c-2").restrict_to_location("Austin").is_none());
    }

    #[test]
    fn test_serialize_round_trip_keeps_institution_kind() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{"candidate_id": "c-1", "institutions": [{"name": "MIT", "type": "University"}]}"#,
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: CandidateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
