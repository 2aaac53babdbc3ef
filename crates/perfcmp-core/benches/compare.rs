// perfcmp - Benchmark comparison and regression scoring
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Comparison engine throughput.
//!
//! Measures matching, scoring and full report assembly over synthetic runs
//! of increasing size.
//!
//! Run with: cargo bench --package perfcmp-core --bench compare

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use perfcmp_core::{analyze, compare, load_run_from_str, score, CompareConfig, Measurement, Run};

const SIZES: &[usize] = &[10, 100, 1_000, 10_000];

fn synthetic_run(size: usize, factor: f64) -> Run {
    Run::new(
        (0..size)
            .map(|i| {
                Measurement::new(format!("Benchmark{i}"), (i as f64 + 1.0) * 10.0 * factor)
                    .with_allocs((i % 7) as u64)
            })
            .collect(),
    )
}

fn synthetic_document(size: usize) -> String {
    let entries: Vec<String> = (0..size)
        .map(|i| {
            format!(
                r#"{{"name": "Benchmark{i}", "ns_per_op": {}, "allocs_per_op": {}}}"#,
                (i + 1) * 10,
                i % 7
            )
        })
        .collect();
    format!(r#"{{"benchmarks": [{}]}}"#, entries.join(","))
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for &size in SIZES {
        let current = synthetic_run(size, 1.07);
        let baseline = synthetic_run(size, 1.0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| compare(black_box(&current), black_box(&baseline), 5.0))
        });
    }
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    for &size in SIZES {
        let run = synthetic_run(size, 1.0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| score(black_box(&run)))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let config = CompareConfig::default();
    for &size in SIZES {
        let current = synthetic_run(size, 0.9);
        let baseline = synthetic_run(size, 1.0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| analyze(black_box(&current), black_box(&baseline), &config))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for &size in SIZES {
        let doc = synthetic_document(size);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| load_run_from_str(black_box(doc)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compare, bench_score, bench_analyze, bench_load);
criterion_main!(benches);
