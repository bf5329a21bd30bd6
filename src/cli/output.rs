//! Output formatting for CLI commands.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::cli::args::{OutputFormat, ScoutArgs};
use crate::engine::SearchResponse;
use crate::error::Result;
use crate::scoring::Bm25Params;

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub analyzer: String,
    pub tokens: Vec<String>,
}

/// Result structure for term expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub terms: BTreeSet<String>,
    pub expanded: BTreeSet<String>,
}

/// One ranking signal.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignalInfo {
    pub name: String,
    pub description: String,
    pub weight: f64,
}

/// Result structure for the ranking description.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResult {
    pub signals: Vec<SignalInfo>,
    pub bm25: Bm25Params,
    pub default_top_k: usize,
    pub institutions: bool,
    pub location_prefilter: bool,
    pub parallel: bool,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &ScoutArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &ScoutArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ScoutArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for SearchResponse {
    fn print_human(&self, args: &ScoutArgs) {
        if args.verbosity() > 1 {
            let analysis = &self.analysis;
            println!("Query Analysis:");
            println!("═══════════════");
            if analysis.degraded {
                println!("Extraction: degraded (plain terms)");
            }
            if let Some(location) = &analysis.location_filter {
                println!("Location filter: {location}");
            }
            println!("Expanded terms: {}", join_terms(&analysis.expanded_terms));
            println!();
        }

        println!("Search Results:");
        println!("═══════════════");

        for (i, ranked) in self.results.iter().enumerate() {
            let breakdown = &ranked.score_breakdown;
            println!();
            println!(
                "Result {}: {} (Score: {:.3})",
                i + 1,
                candidate_label(&ranked.candidate),
                ranked.relevance_score
            );
            println!("─────────────");
            println!(
                "bm25: {:.3}  tfidf: {:.3}  similarity: {:.3}  exact_match: {:.3}",
                breakdown.bm25, breakdown.tfidf, breakdown.similarity, breakdown.exact_match
            );
            if let Some(location) = ranked.candidate.primary_location() {
                println!("location: {location}");
            }
            if !ranked.candidate.skills.is_empty() {
                println!("skills: {}", ranked.candidate.skills.join(", "));
            }
        }

        println!();
        println!(
            "Returned {} of {} candidates",
            self.results.len(),
            self.candidates_considered
        );
        println!("Search time: {:.1}ms", self.search_time_ms);
    }
}

impl HumanOutput for CandidateRecord {
    fn print_human(&self, _args: &ScoutArgs) {
        println!("{}", candidate_label(self));
        println!("─────────────");

        let mut fields: Vec<(&str, String)> = Vec::new();
        let mut push = |label, value: Option<&str>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                fields.push((label, value.to_string()));
            }
        };
        push("email", self.email.as_deref());
        push("phone", self.phone.as_deref());
        push("linkedin", self.linkedin.as_deref());
        push("github", self.github.as_deref());
        push("description", self.description.as_deref());
        push("summary", self.summary.as_deref());

        let lists = [
            ("skills", self.skills.join(", ")),
            ("technologies", self.technologies.join(", ")),
            (
                "companies",
                self.companies
                    .iter()
                    .filter_map(|c| c.name.as_deref())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            (
                "institutions",
                self.institution_names().collect::<Vec<_>>().join(", "),
            ),
            ("education", self.education.join(", ")),
            ("locations", self.locations.join(", ")),
        ];
        fields.extend(lists.into_iter().filter(|(_, value)| !value.is_empty()));

        for (label, value) in fields {
            println!("{label}: {value}");
        }
    }
}

impl HumanOutput for AnalysisResult {
    fn print_human(&self, args: &ScoutArgs) {
        if args.verbosity() > 1 {
            println!("Analyzer: {}", self.analyzer);
        }
        println!("{}", self.tokens.join(" "));
    }
}

impl HumanOutput for ExpansionResult {
    fn print_human(&self, args: &ScoutArgs) {
        if args.verbosity() > 1 {
            println!("Terms: {}", join_terms(&self.terms));
        }
        for term in &self.expanded {
            println!("{term}");
        }
    }
}

impl HumanOutput for ExplainResult {
    fn print_human(&self, _args: &ScoutArgs) {
        println!("Ranking Signals:");
        println!("════════════════");

        for signal in &self.signals {
            println!(
                "{:<12} {:>5.2}  {}",
                signal.name, signal.weight, signal.description
            );
        }

        println!();
        println!("BM25: k1={} b={}", self.bm25.k1, self.bm25.b);
        println!("Default top_k: {}", self.default_top_k);
        println!("Institutions: {}", on_off(self.institutions));
        println!("Location pre-filter: {}", on_off(self.location_prefilter));
        println!("Parallel scoring: {}", on_off(self.parallel));
    }
}

fn candidate_label(record: &CandidateRecord) -> String {
    match (record.name.as_deref(), record.id()) {
        (Some(name), Some(id)) if !name.is_empty() => format!("{name} [{id}]"),
        (_, Some(id)) => id.to_string(),
        _ => "(unnamed)".to_string(),
    }
}

fn join_terms(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
