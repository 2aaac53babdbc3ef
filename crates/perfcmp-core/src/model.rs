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

//! In-memory model of a benchmark run.
//!
//! Values are built once by the [`loader`](crate::loader) and only ever
//! borrowed afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named benchmark sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Benchmark name, the identity key used for matching.
    pub name: String,
    /// Nanoseconds per operation. Zero when the source had no usable timing.
    pub ns_per_op: f64,
    /// Allocations per operation, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocs_per_op: Option<u64>,
}

impl Measurement {
    /// Creates a measurement without allocation data.
    pub fn new(name: impl Into<String>, ns_per_op: f64) -> Self {
        Self {
            name: name.into(),
            ns_per_op,
            allocs_per_op: None,
        }
    }

    /// Sets the allocation count.
    pub fn with_allocs(mut self, allocs_per_op: u64) -> Self {
        self.allocs_per_op = Some(allocs_per_op);
        self
    }

    /// Returns whether this measurement carries a positive timing.
    #[inline]
    pub fn is_timed(&self) -> bool {
        self.ns_per_op > 0.0
    }
}

/// Aggregate statistics for one metric across a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl StatSummary {
    /// Looks up a statistic by kind (`mean`, `median`, `min` or `max`).
    pub fn get(&self, kind: &str) -> Option<f64> {
        match kind {
            "mean" => self.mean,
            "median" => self.median,
            "min" => self.min,
            "max" => self.max,
            _ => None,
        }
    }
}

/// A named resource reading such as CPU or memory usage.
///
/// The value is kept as the string the document carried; use
/// [`ResourceReading::numeric`] to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceReading {
    pub metric: String,
    pub value: String,
}

impl ResourceReading {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
        }
    }

    /// Parses the value as a float, ignoring surrounding whitespace.
    pub fn numeric(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

/// All measurements from one execution, plus optional aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Measurements in document order.
    pub measurements: Vec<Measurement>,
    /// Per-metric aggregate statistics keyed by metric name.
    #[serde(default)]
    pub performance_stats: BTreeMap<String, StatSummary>,
    /// Resource readings in document order.
    #[serde(default)]
    pub performance_metrics: Vec<ResourceReading>,
    /// Benchmark entries discarded at load time for lacking a usable name.
    #[serde(default)]
    pub dropped_entries: usize,
}

impl Run {
    /// Creates a run from measurements alone.
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self {
            measurements,
            ..Self::default()
        }
    }

    /// Adds aggregate statistics for a metric.
    pub fn with_stat(mut self, metric: impl Into<String>, summary: StatSummary) -> Self {
        self.performance_stats.insert(metric.into(), summary);
        self
    }

    /// Adds a resource reading.
    pub fn with_reading(mut self, reading: ResourceReading) -> Self {
        self.performance_metrics.push(reading);
        self
    }

    /// Number of measurements in the run.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Iterates over measurements with a positive timing.
    pub fn timed(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| m.is_timed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_is_timed() {
        assert!(Measurement::new("a", 1.0).is_timed());
        assert!(!Measurement::new("a", 0.0).is_timed());
        assert!(!Measurement::new("a", -3.0).is_timed());
    }

    #[test]
    fn test_stat_summary_get() {
        let stats = StatSummary {
            mean: Some(1.0),
            median: None,
            min: Some(0.5),
            max: Some(2.0),
        };
        assert_eq!(stats.get("mean"), Some(1.0));
        assert_eq!(stats.get("median"), None);
        assert_eq!(stats.get("p99"), None);
    }

    #[test]
    fn test_resource_reading_numeric() {
        assert_eq!(ResourceReading::new("CPU", " 42.5 ").numeric(), Some(42.5));
        assert_eq!(ResourceReading::new("CPU", "high").numeric(), None);
    }

    #[test]
    fn test_run_timed_filters_non_positive() {
        let run = Run::new(vec![
            Measurement::new("a", 10.0),
            Measurement::new("b", 0.0),
            Measurement::new("c", 5.0),
        ]);
        let names: Vec<_> = run.timed().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(run.len(), 3);
    }
}
