//! Synonym-based query term expansion.
//!
//! Two fixed tables drive expansion:
//!
//! - Technology groups map a canonical name (`python`, `cloud`, ...) to
//!   related tools. A term matches a group when it is a substring of the
//!   canonical name, contains it, or equals one of its synonyms.
//! - Institution groups map an abbreviation (`mit`, `iit`, ...) to full
//!   names. A term matches when it equals the abbreviation, equals a full
//!   name, or is a substring of a full name.
//!
//! A matched group contributes its canonical name and every synonym. The
//! original terms are always kept.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use talentscout::query::QueryExpander;
//!
//! let terms: BTreeSet<String> = ["aws".to_string()].into();
//! let expanded = QueryExpander::new().expand(&terms);
//!
//! assert!(expanded.contains("aws"));
//! assert!(expanded.contains("cloud"));
//! assert!(expanded.contains("azure"));
//! ```

use std::collections::BTreeSet;

/// Technology and skill synonym groups.
pub const TECH_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &["js", "node.js", "nodejs", "react", "angular", "vue"],
    ),
    ("python", &["django", "flask", "fastapi", "pandas", "numpy"]),
    ("java", &["spring", "hibernate", "jsp", "servlet"]),
    (
        "machine learning",
        &[
            "ml",
            "ai",
            "artificial intelligence",
            "deep learning",
            "neural networks",
        ],
    ),
    ("database", &["sql", "mysql", "postgresql", "mongodb", "redis"]),
    (
        "cloud",
        &["aws", "azure", "gcp", "google cloud", "amazon web services"],
    ),
    (
        "devops",
        &["docker", "kubernetes", "jenkins", "ci/cd", "terraform"],
    ),
    (
        "frontend",
        &["react", "angular", "vue", "html", "css", "javascript"],
    ),
    ("backend", &["api", "server", "database", "microservices"]),
    (
        "mobile",
        &["android", "ios", "react native", "flutter", "swift", "kotlin"],
    ),
];

/// Institution abbreviations and their full names.
pub const INSTITUTION_SYNONYMS: &[(&str, &[&str])] = &[
    ("mit", &["massachusetts institute of technology"]),
    ("iit", &["indian institute of technology"]),
    ("stanford", &["stanford university"]),
    ("harvard", &["harvard university"]),
    ("caltech", &["california institute of technology"]),
    ("oxford", &["university of oxford"]),
    ("cambridge", &["university of cambridge"]),
];

/// Expands query terms through the synonym tables.
#[derive(Clone, Copy, Debug)]
pub struct QueryExpander {
    include_institutions: bool,
}

impl QueryExpander {
    /// Create an expander using both tables.
    pub fn new() -> Self {
        QueryExpander {
            include_institutions: true,
        }
    }

    /// Enable or disable the institution table.
    pub fn with_institutions(mut self, include: bool) -> Self {
        self.include_institutions = include;
        self
    }

    fn matches_tech_group(term: &str, key: &str, synonyms: &[&str]) -> bool {
        key.contains(term) || term.contains(key) || synonyms.contains(&term)
    }

    fn matches_institution_group(term: &str, key: &str, names: &[&str]) -> bool {
        term == key || names.iter().any(|name| name.contains(term))
    }

    fn add_group(expanded: &mut BTreeSet<String>, key: &str, synonyms: &[&str]) {
        expanded.insert(key.to_string());
        expanded.extend(synonyms.iter().map(|s| s.to_string()));
    }

    /// Expand a term set. Matching is case-insensitive; original terms are
    /// kept as given.
    pub fn expand(&self, terms: &BTreeSet<String>) -> BTreeSet<String> {
        let mut expanded = terms.clone();

        for term in terms {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }

            for (key, synonyms) in TECH_SYNONYMS {
                if Self::matches_tech_group(&term, key, synonyms) {
                    Self::add_group(&mut expanded, key, synonyms);
                }
            }

            if self.include_institutions {
                for (key, names) in INSTITUTION_SYNONYMS {
                    if Self::matches_institution_group(&term, key, names) {
                        Self::add_group(&mut expanded, key, names);
                    }
                }
            }
        }

        expanded
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new()
    }
}
