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

//! Full comparison report.
//!
//! [`analyze`] runs every computation on a pair of runs and returns the
//! derived values as one plain structure that renderers consume.

use crate::config::CompareConfig;
use crate::engine::{compare, ComparisonResult};
use crate::error::ConfigError;
use crate::model::Run;
use crate::summary::{summarize, Summary};
use crate::supplemental::{
    allocation_profile, compare_resources, compare_stats, AllocationProfile, ResourceComparison,
    StatComparison,
};
use serde::{Deserialize, Serialize};

/// Everything derived from comparing a current run with a baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Settings the report was computed with.
    pub config: CompareConfig,
    /// Per-benchmark results in current-run order.
    pub results: Vec<ComparisonResult>,
    pub summary: Summary,
    pub stats: Vec<StatComparison>,
    pub resources: Vec<ResourceComparison>,
    pub current_allocations: AllocationProfile,
    pub baseline_allocations: AllocationProfile,
    /// Benchmark entries dropped while loading the current run.
    pub current_dropped: usize,
    /// Benchmark entries dropped while loading the baseline run.
    pub baseline_dropped: usize,
}

impl ComparisonReport {
    pub fn has_regressions(&self) -> bool {
        self.summary.regressions > 0
    }

    /// Results classified as regressions, in current-run order.
    pub fn regressions(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results
            .iter()
            .filter(|r| r.classification.is_regression())
    }

    /// Results classified as improvements, in current-run order.
    pub fn improvements(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results
            .iter()
            .filter(|r| r.classification.is_improvement())
    }
}

/// Compares two runs and collects all derived values.
///
/// # Errors
///
/// Returns [`ConfigError`] if the threshold or score scale is invalid.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{analyze, CompareConfig, Measurement, Run};
///
/// let current = Run::new(vec![Measurement::new("A", 300.0)]);
/// let baseline = Run::new(vec![Measurement::new("A", 200.0)]);
///
/// let report = analyze(&current, &baseline, &CompareConfig::default()).unwrap();
/// assert!(report.has_regressions());
/// ```
pub fn analyze(
    current: &Run,
    baseline: &Run,
    config: &CompareConfig,
) -> Result<ComparisonReport, ConfigError> {
    config.validate()?;

    let results = compare(current, baseline, config.threshold_pct);
    let summary = summarize(&results, current, baseline, config);

    Ok(ComparisonReport {
        config: *config,
        stats: compare_stats(current, baseline),
        resources: compare_resources(current, baseline),
        current_allocations: allocation_profile(current),
        baseline_allocations: allocation_profile(baseline),
        current_dropped: current.dropped_entries,
        baseline_dropped: baseline.dropped_entries,
        results,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;

    #[test]
    fn test_analyze_collects_everything() {
        let current = Run::new(vec![
            Measurement::new("fast", 50.0).with_allocs(2),
            Measurement::new("slow", 300.0),
            Measurement::new("same", 100.0),
        ]);
        let baseline = Run::new(vec![
            Measurement::new("fast", 100.0).with_allocs(4),
            Measurement::new("slow", 200.0),
            Measurement::new("same", 100.0),
        ]);

        let report = analyze(&current, &baseline, &CompareConfig::default()).unwrap();
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.regressions().count(), 1);
        assert_eq!(report.improvements().count(), 1);
        assert_eq!(report.summary.unchanged, 1);
        assert_eq!(report.current_allocations.samples, 1);
        assert_eq!(report.baseline_allocations.max, Some(4));
        assert!(report.has_regressions());
    }

    #[test]
    fn test_analyze_rejects_invalid_config() {
        let run = Run::default();
        let err = analyze(&run, &run, &CompareConfig::new(-5.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidThreshold(-5.0));
    }

    #[test]
    fn test_report_serializes() {
        let run = Run::new(vec![Measurement::new("a", 10.0)]);
        let report = analyze(&run, &run, &CompareConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["classification"], "unchanged");
        assert_eq!(json["summary"]["threshold_pct"], 5.0);
    }
}
