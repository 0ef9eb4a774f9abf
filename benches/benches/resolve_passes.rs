// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_detent::{
    AnyPlatform, CapablePlatform, FallbackPlatform, RawSize, ResolveInputs, SizeRegistry,
    resolve_all, rules,
};

fn size_lists() -> Vec<(&'static str, Vec<RawSize>)> {
    vec![
        ("keywords", vec!["small".into(), "medium".into(), "large".into()]),
        (
            "mixed",
            vec![RawSize::from(240.0), "50%".into(), "auto".into()],
        ),
        (
            "overlong",
            vec![
                "25%".into(),
                "large".into(),
                RawSize::Unsupported,
                "medium".into(),
                "90%".into(),
            ],
        ),
    ]
}

// Simulates a run of layout passes while the container is resized.
fn extents(n: usize) -> Vec<f64> {
    (0..n).map(|i| 320.0 + (i % 64) as f64 * 12.5).collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, raw) in size_lists() {
        group.bench_function(name, |b| b.iter(|| black_box(rules(black_box(&raw)))));
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all");
    let passes = extents(256);
    group.throughput(Throughput::Elements(passes.len() as u64));
    for (name, raw) in size_lists() {
        let set = rules(&raw);
        group.bench_function(format!("capable_{name}"), |b| {
            let platform = CapablePlatform::default();
            b.iter(|| {
                for &extent in &passes {
                    let inputs = ResolveInputs::new(extent)
                        .with_content_height(Some(extent * 0.3))
                        .with_max_height(Some(900.0));
                    black_box(resolve_all(&platform, &set.rules, &inputs));
                }
            })
        });
        group.bench_function(format!("fallback_{name}"), |b| {
            b.iter(|| {
                for &extent in &passes {
                    let inputs = ResolveInputs::new(extent);
                    black_box(resolve_all(&FallbackPlatform, &set.rules, &inputs));
                }
            })
        });
    }
    group.finish();
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let passes = extents(256);
    let set = rules(&["small".into(), "auto".into(), "large".into()]);
    let platform = AnyPlatform::default();
    let resolved: Vec<_> = passes
        .iter()
        .map(|&extent| resolve_all(&platform, &set.rules, &ResolveInputs::new(extent)))
        .collect();
    group.throughput(Throughput::Elements(resolved.len() as u64));
    group.bench_function("register_damage", |b| {
        b.iter_batched(
            || resolved.clone(),
            |batches| {
                let mut registry = SizeRegistry::new();
                let mut changed = 0;
                for batch in batches {
                    changed += registry.register(batch).changed.len();
                }
                black_box(changed);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("lookup", |b| {
        let mut registry = SizeRegistry::new();
        let _ = registry.register(resolved[0].clone());
        b.iter(|| {
            black_box(registry.lookup(black_box("custom-auto")));
            black_box(registry.lookup(black_box("large")));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolve, bench_register);
criterion_main!(benches);
