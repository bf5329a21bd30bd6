//! Candidate records, corpus construction and candidate sources.

pub mod corpus;
pub mod lenient;
pub mod record;
pub mod source;

pub use corpus::{CandidateDocument, CorpusBuilder};
pub use record::{Achievement, CandidateRecord, CompanyRef, Institution, Project, Publication};
pub use source::{CandidateSource, InMemoryCandidateSource, JsonlCandidateSource};
