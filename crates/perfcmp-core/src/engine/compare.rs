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

//! Benchmark matching and regression classification.

use crate::model::{Measurement, Run};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Outcome of comparing one benchmark against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Slower than baseline by more than the threshold.
    Regression,
    /// Faster than baseline by more than the threshold.
    Improvement,
    /// Within the threshold in either direction.
    Unchanged,
}

impl Classification {
    /// Returns the classification as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Regression => "regression",
            Classification::Improvement => "improvement",
            Classification::Unchanged => "unchanged",
        }
    }

    pub fn is_regression(&self) -> bool {
        matches!(self, Classification::Regression)
    }

    pub fn is_improvement(&self) -> bool {
        matches!(self, Classification::Improvement)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison of a matched current/baseline pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Benchmark name.
    pub name: String,
    /// Current duration in nanoseconds per operation.
    pub current_ns: f64,
    /// Baseline duration in nanoseconds per operation.
    pub baseline_ns: f64,
    /// Percentage change (positive = slower, negative = faster).
    pub change_pct: f64,
    /// Regression, improvement or unchanged.
    pub classification: Classification,
}

impl ComparisonResult {
    /// Benchmark name without a leading `Benchmark` prefix, for display.
    pub fn display_name(&self) -> &str {
        self.name.strip_prefix("Benchmark").unwrap_or(&self.name)
    }

    /// Percentage improvement (positive = faster), the mirror of `change_pct`.
    pub fn improvement_pct(&self) -> f64 {
        -self.change_pct
    }
}

/// Percentage change from `baseline_ns` to `current_ns`.
///
/// Returns `None` when either timing is not positive; such pairs carry no
/// usable signal. A ratio that overflows saturates at `f64::MAX` so results
/// always serialize as JSON numbers.
#[inline]
pub fn change_pct(current_ns: f64, baseline_ns: f64) -> Option<f64> {
    if current_ns <= 0.0 || baseline_ns <= 0.0 {
        return None;
    }
    let pct = (current_ns - baseline_ns) / baseline_ns * 100.0;
    if pct.is_nan() {
        return None;
    }
    Some(pct.clamp(f64::MIN, f64::MAX))
}

/// Classifies a percentage change against a symmetric threshold.
///
/// The boundary is exclusive: a change of exactly `threshold_pct` in either
/// direction is [`Classification::Unchanged`].
#[inline]
pub fn classify(change_pct: f64, threshold_pct: f64) -> Classification {
    if change_pct > threshold_pct {
        Classification::Regression
    } else if change_pct < -threshold_pct {
        Classification::Improvement
    } else {
        Classification::Unchanged
    }
}

/// Compares a current run against a baseline run.
///
/// Benchmarks are matched by exact name. Current benchmarks with no baseline
/// counterpart, and pairs where either side has a non-positive timing, are
/// skipped and produce no result. Results follow the current run's order.
///
/// When the baseline contains the same name more than once, the last entry
/// wins.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{compare, Classification, Measurement, Run};
///
/// let current = Run::new(vec![Measurement::new("A", 100.0)]);
/// let baseline = Run::new(vec![Measurement::new("A", 200.0)]);
///
/// let results = compare(&current, &baseline, 5.0);
/// assert_eq!(results[0].change_pct, -50.0);
/// assert_eq!(results[0].classification, Classification::Improvement);
/// ```
pub fn compare(current: &Run, baseline: &Run, threshold_pct: f64) -> Vec<ComparisonResult> {
    let baseline_lookup: HashMap<&str, &Measurement> = baseline
        .measurements
        .iter()
        .map(|m| (m.name.as_str(), m))
        .collect();

    let mut results = Vec::new();

    for current_bench in &current.measurements {
        let Some(baseline_bench) = baseline_lookup.get(current_bench.name.as_str()) else {
            debug!(benchmark = %current_bench.name, "no baseline match, skipping");
            continue;
        };

        let Some(change) = change_pct(current_bench.ns_per_op, baseline_bench.ns_per_op) else {
            debug!(
                benchmark = %current_bench.name,
                current_ns = current_bench.ns_per_op,
                baseline_ns = baseline_bench.ns_per_op,
                "non-positive timing, skipping"
            );
            continue;
        };

        results.push(ComparisonResult {
            name: current_bench.name.clone(),
            current_ns: current_bench.ns_per_op,
            baseline_ns: baseline_bench.ns_per_op,
            change_pct: change,
            classification: classify(change, threshold_pct),
        });
    }

    results
}
