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

//! Inspect command - what the loader read from a report

use super::load_report;
use crate::error::CliError;
use colored::Colorize;
use perfcmp_core::{allocation_profile, Run};
use std::path::Path;

/// Print a structural overview of a benchmark report.
///
/// # Errors
///
/// Returns `Err` if the report cannot be loaded.
pub fn inspect(file: &Path) -> Result<(), CliError> {
    let run = load_report(file, "input")?;
    print!("{}", describe(&file.display().to_string(), &run));
    Ok(())
}

fn describe(label: &str, run: &Run) -> String {
    let mut out = String::new();
    let timed = run.timed().count();

    out.push_str(&format!("{} {}\n", "✓".green().bold(), label));
    out.push_str(&format!("  Benchmarks: {}\n", run.len()));
    out.push_str(&format!("  Timed: {}\n", timed));
    if timed < run.len() {
        out.push_str(&format!(
            "  Untimed: {} (excluded from comparison and scoring)\n",
            run.len() - timed
        ));
    }
    if run.dropped_entries > 0 {
        out.push_str(&format!(
            "  {} {} entries dropped (no usable name)\n",
            "!".yellow().bold(), run.dropped_entries
        ));
    }

    let allocs = allocation_profile(run);
    if let (Some(mean), Some(min), Some(max)) = (allocs.mean, allocs.min, allocs.max) {
        out.push_str(&format!(
            "  Allocations: {} samples, mean {:.1}, min {}, max {}\n",
            allocs.samples, mean, min, max
        ));
    }

    if !run.performance_stats.is_empty() {
        let metrics: Vec<_> = run.performance_stats.keys().map(String::as_str).collect();
        out.push_str(&format!("  Stats: {}\n", metrics.join(", ")));
    }
    if !run.performance_metrics.is_empty() {
        out.push_str("  Metrics:\n");
        for reading in &run.performance_metrics {
            out.push_str(&format!("    {}: {}\n", reading.metric, reading.value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcmp_core::{Measurement, ResourceReading, StatSummary};

    #[test]
    fn test_describe_lists_sections() {
        colored::control::set_override(false);
        let run = Run::new(vec![
            Measurement::new("a", 10.0).with_allocs(3),
            Measurement::new("b", 0.0),
        ])
        .with_stat("ns_per_op", StatSummary::default())
        .with_reading(ResourceReading::new("CPU", "12.5"));

        let text = describe("report.json", &run);
        assert!(text.contains("Benchmarks: 2"));
        assert!(text.contains("Untimed: 1"));
        assert!(text.contains("Allocations: 1 samples"));
        assert!(text.contains("Stats: ns_per_op"));
        assert!(text.contains("CPU: 12.5"));
    }
}
