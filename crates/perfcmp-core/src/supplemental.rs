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

//! Side-by-side views of run aggregates.
//!
//! These do not affect classification or scoring. They pair up the optional
//! `performance_stats` and `performance_metrics` sections of two runs and
//! profile per-benchmark allocation counts.

use crate::model::{ResourceReading, Run};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metrics whose aggregate statistics are compared, in output order.
pub const STAT_METRICS: &[&str] = &["ns_per_op", "allocs_per_op"];

/// Statistic kinds compared for each metric, in output order.
pub const STAT_KINDS: &[&str] = &["mean", "median", "min", "max"];

/// Resource metrics compared between runs, in output order.
pub const RESOURCE_METRICS: &[&str] = &["CPU", "Memory", "Network"];

/// One statistic of one metric in both runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatComparison {
    /// Metric name, e.g. `ns_per_op`.
    pub metric: String,
    /// Statistic kind, e.g. `median`.
    pub stat: String,
    pub current: f64,
    pub baseline: f64,
}

/// One resource reading in both runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceComparison {
    pub metric: String,
    pub current: f64,
    pub baseline: f64,
}

/// Distribution of positive `allocs_per_op` values within a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// Number of measurements with a positive allocation count.
    pub samples: usize,
    pub mean: Option<f64>,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Pairs the aggregate statistics both runs report.
///
/// A metric is skipped unless both runs carry it; within a metric, a
/// statistic is included only when both sides define it.
pub fn compare_stats(current: &Run, baseline: &Run) -> Vec<StatComparison> {
    let mut comparisons = Vec::new();

    for &metric in STAT_METRICS {
        let (Some(cur), Some(base)) = (
            current.performance_stats.get(metric),
            baseline.performance_stats.get(metric),
        ) else {
            continue;
        };

        for &stat in STAT_KINDS {
            if let (Some(c), Some(b)) = (cur.get(stat), base.get(stat)) {
                comparisons.push(StatComparison {
                    metric: metric.to_string(),
                    stat: stat.to_string(),
                    current: c,
                    baseline: b,
                });
            }
        }
    }

    comparisons
}

/// Pairs the CPU, memory and network readings both runs report.
///
/// A metric is included only when present on both sides and both values
/// parse as numbers. Repeated readings for the same metric: last one wins.
pub fn compare_resources(current: &Run, baseline: &Run) -> Vec<ResourceComparison> {
    fn lookup(run: &Run) -> HashMap<&str, &ResourceReading> {
        run.performance_metrics
            .iter()
            .map(|r| (r.metric.as_str(), r))
            .collect()
    }

    let current_lookup = lookup(current);
    let baseline_lookup = lookup(baseline);

    RESOURCE_METRICS
        .iter()
        .filter_map(|&metric| {
            let current = current_lookup.get(metric)?.numeric()?;
            let baseline = baseline_lookup.get(metric)?.numeric()?;
            Some(ResourceComparison {
                metric: metric.to_string(),
                current,
                baseline,
            })
        })
        .collect()
}

/// Profiles the positive allocation counts of a run.
pub fn allocation_profile(run: &Run) -> AllocationProfile {
    let allocs: Vec<u64> = run
        .measurements
        .iter()
        .filter_map(|m| m.allocs_per_op)
        .filter(|&a| a > 0)
        .collect();

    if allocs.is_empty() {
        return AllocationProfile::default();
    }

    let sum: f64 = allocs.iter().map(|&a| a as f64).sum();
    AllocationProfile {
        samples: allocs.len(),
        mean: Some(sum / allocs.len() as f64),
        min: allocs.iter().copied().min(),
        max: allocs.iter().copied().max(),
    }
}
