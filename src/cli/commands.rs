//! Command implementations for the talentscout CLI.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::candidate::JsonlCandidateSource;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::query::{KeywordExtractor, PrecomputedExtractor, QueryExpander, QueryParameterExtractor};
use crate::ranking::{CompositeRanker, RankingConfig};

/// Execute a CLI command.
pub fn execute_command(args: ScoutArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_candidates(search_args.clone(), &args),
        Command::Show(show_args) => show_candidate(show_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Expand(expand_args) => expand_terms(expand_args.clone(), &args),
        Command::Explain(explain_args) => explain_ranking(explain_args.clone(), &args),
    }
}

/// Build the ranking configuration from an optional file and the override
/// flags.
pub fn load_ranking_config(options: &RankingOptions) -> Result<RankingConfig> {
    let mut config = match &options.config {
        Some(path) => {
            debug!("Loading ranking configuration from {}", path.display());
            RankingConfig::from_file(path)?
        }
        None => RankingConfig::default(),
    };

    if options.no_institutions {
        config.institutions = false;
    }
    if options.no_location_filter {
        config.location_prefilter = false;
    }
    if options.parallel {
        config.parallel = true;
    }

    config.validate()?;
    Ok(config)
}

/// Rank candidates from a file against a query.
fn search_candidates(args: SearchArgs, cli_args: &ScoutArgs) -> Result<()> {
    let config = load_ranking_config(&args.ranking)?;

    let extractor: Box<dyn QueryParameterExtractor> = match &args.params {
        Some(path) => Box::new(PrecomputedExtractor::from_file(path)?),
        None => Box::new(KeywordExtractor::new()),
    };
    let source = Arc::new(JsonlCandidateSource::new(&args.candidates));
    let engine = SearchEngine::with_extractor(source, extractor, config)?;

    let response = engine.search(&args.query, args.top_k)?;

    output_result("Search completed", &response, cli_args)
}

/// Print a single candidate.
fn show_candidate(args: ShowArgs, cli_args: &ScoutArgs) -> Result<()> {
    let source = Arc::new(JsonlCandidateSource::new(&args.candidates));
    let engine = SearchEngine::new(source, RankingConfig::default())?;

    let record = engine.get_by_id(&args.candidate_id)?;

    output_result("Candidate found", &record, cli_args)
}

/// Print the normalized tokens of a text.
fn analyze_text(args: AnalyzeArgs, cli_args: &ScoutArgs) -> Result<()> {
    let analyzer = EnglishAnalyzer::new();
    let tokens = analyzer.normalize(&args.text);

    output_result(
        "Text analyzed",
        &AnalysisResult {
            text: args.text,
            analyzer: analyzer.name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// Print the expansion of a set of terms.
fn expand_terms(args: ExpandArgs, cli_args: &ScoutArgs) -> Result<()> {
    let terms: BTreeSet<String> = args
        .terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();
    let expanded = QueryExpander::new()
        .with_institutions(!args.no_institutions)
        .expand(&terms);

    output_result("Terms expanded", &ExpansionResult { terms, expanded }, cli_args)
}

/// Describe the ranking signals.
fn explain_ranking(args: ExplainArgs, cli_args: &ScoutArgs) -> Result<()> {
    let config = load_ranking_config(&RankingOptions {
        config: args.config,
        ..Default::default()
    })?;
    let ranker = CompositeRanker::new(config)?;

    let signals = ranker
        .signals()
        .into_iter()
        .map(|(scorer, weight)| SignalInfo {
            name: scorer.name().to_string(),
            description: scorer.description().to_string(),
            weight,
        })
        .collect();

    let config = ranker.config();
    output_result(
        "Ranking configuration",
        &ExplainResult {
            signals,
            bm25: config.bm25,
            default_top_k: config.default_top_k,
            institutions: config.institutions,
            location_prefilter: config.location_prefilter,
            parallel: config.parallel,
        },
        cli_args,
    )
}
