// Criterion benchmarks for Skillmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skillmatch::core::{sanitize, Matcher};
use skillmatch::models::{Candidate, MatchedCandidate};
use skillmatch::report::{paginate, wrap_text};
use std::collections::BTreeSet;

fn create_candidate(id: usize) -> Candidate {
    let skills = match id % 4 {
        0 => "React, TypeScript, JavaScript, CSS",
        1 => "Rust, PostgreSQL, Docker",
        2 => "Python, Django, SQL",
        _ => "Go, Kubernetes, Terraform",
    };

    Candidate {
        id: None,
        candidate_name: Some(format!("Candidate {}", id)),
        skills: Some(skills.to_string()),
        feedback: None,
        transcript: Some("Interviewer: Tell me about a project. Candidate: Sure.".repeat(4)),
    }
}

fn required_skills() -> BTreeSet<String> {
    ["react", "typescript", "rust", "sql", "docker"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn bench_sanitize(c: &mut Criterion) {
    let text = "\u{26A0}\u{FE0F} A fairly long\n assessment \t with mixed whitespace \u{2705}".repeat(10);
    c.bench_function("sanitize", |b| {
        b.iter(|| sanitize(black_box(&text)));
    });
}

fn bench_wrap_text(c: &mut Criterion) {
    let text = sanitize(&"the quick brown fox jumps over the lazy dog ".repeat(50));
    c.bench_function("wrap_text", |b| {
        b.iter(|| wrap_text(black_box(&text), black_box(495.28), black_box(10.0)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let required = required_skills();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |b, _| {
                b.iter_batched(
                    || candidates.clone(),
                    |pool| matcher.match_candidates(black_box(&required), pool),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_pagination(c: &mut Criterion) {
    let matched: Vec<MatchedCandidate> = (0..20)
        .map(|i| MatchedCandidate {
            candidate_name: format!("Candidate {}", i),
            match_count: 3,
            matched_skills: vec!["react".into(), "rust".into(), "sql".into()],
            summary: "Matched 3 of 5 required skills. Candidate skill set: react, rust, sql."
                .to_string(),
            feedback: None,
            all_skills: vec!["react".into(), "rust".into(), "sql".into()],
            transcript: "Interviewer: Question? Candidate: Answer. ".repeat(30),
        })
        .collect();

    c.bench_function("paginate_20_candidates", |b| {
        b.iter(|| paginate(black_box(&matched)));
    });
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_wrap_text,
    bench_matching,
    bench_pagination
);
criterion_main!(benches);
