//! Criterion benchmarks for talentscout.
//!
//! Covers text analysis, corpus construction, the individual scorers and a
//! full ranking pass over generated candidate collections.

use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use talentscout::analysis::analyzer::EnglishAnalyzer;
use talentscout::candidate::{CandidateRecord, CorpusBuilder};
use talentscout::query::QueryExpander;
use talentscout::ranking::{CompositeRanker, RankingConfig};
use talentscout::scoring::{
    Bm25Scorer, ScoringContext, ScoringQuery, Scorer, SimilarityScorer, TfIdfScorer,
};

const WORDS: &[&str] = &[
    "python", "rust", "java", "engineer", "developer", "backend", "frontend", "cloud",
    "aws", "docker", "kubernetes", "data", "pipelines", "machine", "learning", "senior",
    "junior", "distributed", "systems", "databases", "react", "mobile", "security", "analyst",
];

const LOCATIONS: &[&str] = &["New York", "Austin", "Berlin", "London", "Bangalore", "Boston"];

/// Generate candidate records with pseudo-random descriptions.
fn generate_candidates(count: usize) -> Vec<CandidateRecord> {
    (0..count)
        .map(|i| {
            let length = 10 + (i % 30);
            let description: Vec<&str> = (0..length)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect();

            CandidateRecord::new(format!("c{i}"))
                .with_name(format!("Candidate {i}"))
                .with_description(description.join(" "))
                .with_skill(WORDS[i % WORDS.len()])
                .with_skill(WORDS[(i * 3) % WORDS.len()])
                .with_location(LOCATIONS[i % LOCATIONS.len()])
        })
        .collect()
}

fn query_terms() -> BTreeSet<String> {
    let terms: BTreeSet<String> = ["python", "aws", "engineer", "new york"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    QueryExpander::new().expand(&terms)
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = EnglishAnalyzer::new();
    let builder = CorpusBuilder::new();
    let texts: Vec<String> = generate_candidates(100)
        .iter()
        .map(|record| builder.build_corpus(record).0)
        .collect();

    group.bench_function("normalize_single_corpus", |b| {
        b.iter(|| black_box(analyzer.normalize(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("normalize_batch_corpora", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(analyzer.normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark corpus construction.
fn bench_corpus_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_building");
    let builder = CorpusBuilder::new();

    for size in [100, 1000] {
        let records = generate_candidates(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build_all", size), &records, |b, records| {
            b.iter_with_setup(|| records.clone(), |records| black_box(builder.build_all(records)))
        });
    }

    group.finish();
}

/// Benchmark the scorers over a prepared context.
fn bench_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorers");

    let builder = CorpusBuilder::new();
    let documents = builder.build_all(generate_candidates(500));
    let query = ScoringQuery::new(
        query_terms(),
        "Senior Python engineer with AWS in New York",
        builder.analyzer(),
    );
    let context = ScoringContext::new(&documents, &query);

    let scorers: Vec<Box<dyn Scorer>> = vec![
        Box::new(Bm25Scorer::default()),
        Box::new(TfIdfScorer::new()),
        Box::new(SimilarityScorer::new()),
    ];
    for scorer in &scorers {
        group.bench_function(scorer.name(), |b| {
            b.iter(|| black_box(scorer.score(black_box(&context))))
        });
    }

    group.finish();
}

/// Benchmark a full ranking pass, sequential and parallel.
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    group.sample_size(20);

    let sequential = CompositeRanker::new(RankingConfig::default()).unwrap();
    let parallel = CompositeRanker::new(RankingConfig {
        parallel: true,
        ..RankingConfig::default()
    })
    .unwrap();
    let terms = query_terms();

    for size in [100, 500] {
        let documents = sequential.corpus_builder().build_all(generate_candidates(size));
        group.throughput(Throughput::Elements(size as u64));

        for (label, ranker) in [("sequential", &sequential), ("parallel", &parallel)] {
            group.bench_with_input(BenchmarkId::new(label, size), &documents, |b, documents| {
                b.iter_with_setup(
                    || documents.clone(),
                    |documents| {
                        black_box(ranker.rank(
                            documents,
                            terms.clone(),
                            "Python AWS engineer in New York",
                            20,
                        ))
                    },
                )
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_corpus_building,
    bench_scorers,
    bench_ranking
);
criterion_main!(benches);
