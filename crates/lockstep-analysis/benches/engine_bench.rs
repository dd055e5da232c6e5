//! Matcher and registry benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lockstep_analysis::engine::{CommentMatcher, RevisionRegistry};
use lockstep_analysis::parsers::CommentToken;
use lockstep_core::config::DEFAULT_PATTERN;
use lockstep_core::types::diagnostic::SourceLocation;

fn make_comments(n: usize) -> Vec<CommentToken> {
    (0..n)
        .map(|i| {
            // Every tenth comment is a magic comment; the rest is the
            // prose a real tree is mostly made of.
            let text = if i % 10 == 0 {
                format!("[feature-revision] id: feature-{}, revision: {}", i % 50, i % 7)
            } else {
                format!("ordinary comment number {i} explaining something")
            };
            CommentToken {
                text,
                location: SourceLocation {
                    file: format!("file_{}.rb", i % 100),
                    line: (i % 500) as u32 + 1,
                    column: 1,
                    end_line: (i % 500) as u32 + 1,
                    end_column: 40,
                },
            }
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let matcher = CommentMatcher::new(DEFAULT_PATTERN).unwrap();
    let comments = make_comments(10_000);

    c.bench_function("matcher_10k_comments", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for comment in &comments {
                if matcher.try_match(black_box(comment)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits);
        })
    });
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_100k_checks", |b| {
        b.iter(|| {
            let registry = RevisionRegistry::new();
            for i in 0..100_000u32 {
                let id = format!("feature-{}", i % 1_000);
                let revision = (i % 3).to_string();
                black_box(registry.check_and_register(&id, &revision));
            }
            black_box(registry.conflict_count());
        })
    });

    c.bench_function("registry_contended_checks", |b| {
        b.iter(|| {
            let registry = RevisionRegistry::new();
            std::thread::scope(|scope| {
                for t in 0..4u32 {
                    let registry = &registry;
                    scope.spawn(move || {
                        for i in 0..10_000u32 {
                            let id = format!("feature-{}", (i + t) % 200);
                            registry.check_and_register(&id, &(i % 3).to_string());
                        }
                    });
                }
            });
            black_box(registry.conflict_count());
        })
    });
}

criterion_group!(benches, bench_matcher, bench_registry);
criterion_main!(benches);
