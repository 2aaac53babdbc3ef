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

//! Run-level aggregation of comparison results.

use crate::config::CompareConfig;
use crate::engine::{score_with_scale, Classification, ComparisonResult, Score};
use crate::model::Run;
use serde::{Deserialize, Serialize};

/// Counts and scores summarizing one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Results classified as regressions.
    pub regressions: usize,
    /// Results classified as improvements.
    pub improvements: usize,
    /// Current benchmarks that are neither regressions nor improvements.
    ///
    /// This is `total_benchmarks - regressions - improvements`, so benchmarks
    /// skipped for lacking a baseline or a usable timing are counted here too.
    pub unchanged: usize,
    /// Number of benchmarks in the current run.
    pub total_benchmarks: usize,
    /// Number of benchmarks in the baseline run.
    pub baseline_benchmarks: usize,
    /// Number of matched pairs that produced a result.
    pub compared: usize,
    /// Threshold the results were classified with.
    pub threshold_pct: f64,
    pub current_score: Score,
    pub baseline_score: Score,
    /// `current_score - baseline_score`; positive means the current run scores better.
    pub score_delta: f64,
}

impl Summary {
    /// Current benchmarks that produced no comparison result.
    pub fn skipped(&self) -> usize {
        self.total_benchmarks.saturating_sub(self.compared)
    }

    /// Returns whether the current run scores at least as well as the baseline.
    pub fn score_held(&self) -> bool {
        self.score_delta >= 0.0
    }
}

/// Aggregates comparison results into a [`Summary`].
///
/// `results` is expected to come from [`compare`](crate::compare) on the
/// same two runs.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{compare, summarize, CompareConfig, Measurement, Run};
///
/// let current = Run::new(vec![Measurement::new("A", 100.0), Measurement::new("B", 100.0)]);
/// let baseline = Run::new(vec![Measurement::new("A", 100.0)]);
/// let config = CompareConfig::default();
///
/// let results = compare(&current, &baseline, config.threshold_pct);
/// let summary = summarize(&results, &current, &baseline, &config);
/// assert_eq!(summary.unchanged, 2);
/// ```
pub fn summarize(
    results: &[ComparisonResult],
    current: &Run,
    baseline: &Run,
    config: &CompareConfig,
) -> Summary {
    let count = |class: Classification| {
        results
            .iter()
            .filter(|r| r.classification == class)
            .count()
    };
    let regressions = count(Classification::Regression);
    let improvements = count(Classification::Improvement);

    let total_benchmarks = current.len();
    let current_score = score_with_scale(current, config.score_scale_ns);
    let baseline_score = score_with_scale(baseline, config.score_scale_ns);

    Summary {
        regressions,
        improvements,
        unchanged: total_benchmarks.saturating_sub(regressions + improvements),
        total_benchmarks,
        baseline_benchmarks: baseline.len(),
        compared: results.len(),
        threshold_pct: config.threshold_pct,
        current_score,
        baseline_score,
        score_delta: current_score.value() - baseline_score.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compare;
    use crate::model::Measurement;

    fn run(entries: &[(&str, f64)]) -> Run {
        Run::new(
            entries
                .iter()
                .map(|(name, ns)| Measurement::new(*name, *ns))
                .collect(),
        )
    }

    fn summary_for(current: &Run, baseline: &Run) -> Summary {
        let config = CompareConfig::default();
        let results = compare(current, baseline, config.threshold_pct);
        summarize(&results, current, baseline, &config)
    }

    #[test]
    fn test_counts() {
        let current = run(&[("a", 200.0), ("b", 50.0), ("c", 100.0)]);
        let baseline = run(&[("a", 100.0), ("b", 100.0), ("c", 101.0)]);
        let summary = summary_for(&current, &baseline);

        assert_eq!(summary.regressions, 1);
        assert_eq!(summary.improvements, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.compared, 3);
        assert_eq!(summary.skipped(), 0);
    }

    #[test]
    fn test_skipped_benchmarks_fold_into_unchanged() {
        let current = run(&[("A", 100.0), ("B", 100.0)]);
        let baseline = run(&[("A", 100.0)]);
        let summary = summary_for(&current, &baseline);

        assert_eq!(summary.compared, 1);
        assert_eq!(summary.unchanged, 2);
        assert_eq!(summary.skipped(), 1);
    }

    #[test]
    fn test_empty_current() {
        let current = Run::default();
        let baseline = run(&[("A", 100.0)]);
        let summary = summary_for(&current, &baseline);

        assert_eq!(summary.regressions, 0);
        assert_eq!(summary.improvements, 0);
        assert_eq!(summary.unchanged, 0);
        assert_eq!(summary.current_score, Score::ZERO);
        assert_eq!(summary.baseline_benchmarks, 1);
    }

    #[test]
    fn test_scores_and_delta() {
        let current = run(&[("a", 10_000.0)]);
        let baseline = run(&[("a", 20_000.0)]);
        let summary = summary_for(&current, &baseline);

        assert_eq!(summary.current_score.value(), 90.0);
        assert_eq!(summary.baseline_score.value(), 80.0);
        assert_eq!(summary.score_delta, 10.0);
        assert!(summary.score_held());
    }

    #[test]
    fn test_scores_use_configured_scale() {
        let current = run(&[("a", 100.0)]);
        let baseline = run(&[("a", 100.0)]);
        let config = CompareConfig::default().with_score_scale(2.0);
        let results = compare(&current, &baseline, config.threshold_pct);
        let summary = summarize(&results, &current, &baseline, &config);

        assert_eq!(summary.current_score.value(), 50.0);
        assert_eq!(summary.score_delta, 0.0);
    }
}
