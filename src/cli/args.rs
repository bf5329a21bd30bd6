//! Command line argument parsing for the talentscout CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// talentscout - rank candidate profiles against recruiter queries
#[derive(Parser, Debug, Clone)]
#[command(name = "talentscout")]
#[command(about = "Rank candidate profiles against free-text recruiter queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ScoutArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ScoutArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank candidates against a query
    Search(SearchArgs),

    /// Show a single candidate
    Show(ShowArgs),

    /// Print the normalized tokens of a text
    Analyze(AnalyzeArgs),

    /// Print the expanded form of a set of terms
    Expand(ExpandArgs),

    /// Describe the ranking signals and their weights
    Explain(ExplainArgs),
}

/// Options shared by commands that build a ranker.
#[derive(Parser, Debug, Clone, Default)]
pub struct RankingOptions {
    /// Ranking configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Leave institutions out of the corpus, scoring and expansion
    #[arg(long)]
    pub no_institutions: bool,

    /// Do not pre-filter candidates by the extracted location
    #[arg(long)]
    pub no_location_filter: bool,

    /// Run the scorers in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Candidate file (JSON Lines or a JSON array)
    #[arg(value_name = "CANDIDATES")]
    pub candidates: PathBuf,

    /// Free-text query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Precomputed query parameters (JSON object) to use instead of keyword
    /// extraction
    #[arg(short, long, value_name = "PARAMS_FILE")]
    pub params: Option<PathBuf>,

    /// Include the query analysis in human output
    #[arg(long)]
    pub show_analysis: bool,

    #[command(flatten)]
    pub ranking: RankingOptions,
}

/// Arguments for showing a candidate
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Candidate file (JSON Lines or a JSON array)
    #[arg(value_name = "CANDIDATES")]
    pub candidates: PathBuf,

    /// Candidate identifier
    #[arg(value_name = "CANDIDATE_ID")]
    pub candidate_id: String,
}

/// Arguments for text analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for term expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Terms to expand
    #[arg(value_name = "TERMS", required = true)]
    pub terms: Vec<String>,

    /// Skip the institution table
    #[arg(long)]
    pub no_institutions: bool,
}

/// Arguments for describing the ranking
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Ranking configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
