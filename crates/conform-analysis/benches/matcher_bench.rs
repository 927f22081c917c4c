//! Exclusion matcher benchmarks: default rule lists over a synthetic tree.

use conform_analysis::conventions::{spec_file, storybook_file};
use conform_analysis::patterns::{is_excluded, ExcludePatterns};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Paths shaped like a mid-sized frontend repo.
fn generate_paths(count: usize) -> Vec<String> {
    const DIRS: &[&str] = &["src/components", "src/models", "src/utils/errors", "lib/__tests__", "app/pages"];
    const FILES: &[&str] = &[
        "Button.tsx",
        "Button.spec.tsx",
        "Button.stories.tsx",
        "user.js",
        "user.spec.js",
        "index.ts",
        "types.d.ts",
        "http-error.ts",
    ];
    (0..count)
        .map(|i| {
            let dir = DIRS[i % DIRS.len()];
            let file = FILES[(i / DIRS.len()) % FILES.len()];
            if i % 3 == 0 {
                format!("{dir}/nested_{i}/{file}").replace('/', "\\")
            } else {
                format!("{dir}/nested_{i}/{file}")
            }
        })
        .collect()
}

fn default_lists_benchmark(c: &mut Criterion) {
    let paths = generate_paths(1_000);
    let lists = [
        ("spec_defaults", ExcludePatterns::from_defaults(spec_file::DEFAULT_EXCLUDES)),
        ("storybook_defaults", ExcludePatterns::from_defaults(storybook_file::DEFAULT_EXCLUDES)),
    ];

    let mut group = c.benchmark_group("exclude_defaults");
    for (name, patterns) in &lists {
        group.bench_with_input(BenchmarkId::from_parameter(name), patterns, |b, patterns| {
            b.iter(|| {
                let excluded = paths.iter().filter(|p| patterns.is_excluded(p)).count();
                std::hint::black_box(excluded)
            });
        });
    }
    group.finish();
}

fn pattern_shapes_benchmark(c: &mut Criterion) {
    let paths = generate_paths(1_000);
    let shapes = [
        ("suffix", "**/*.spec.js"),
        ("trailing_name", "**/index.ts"),
        ("directory", "**/errors/**"),
        ("loose_wildcard", "**/*-error*"),
        ("brace_group", "**/*-error.{js,ts}"),
        ("substring", "nested_5"),
    ];

    let mut group = c.benchmark_group("pattern_shape");
    for (name, pattern) in shapes {
        let patterns = [pattern];
        group.bench_function(name, |b| {
            b.iter(|| {
                let hits = paths.iter().filter(|p| is_excluded(p, &patterns)).count();
                std::hint::black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, default_lists_benchmark, pattern_shapes_benchmark);
criterion_main!(benches);
