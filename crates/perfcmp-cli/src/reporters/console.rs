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

//! Console reporter.

use super::{signed_pct, ReportContext};
use colored::{ColoredString, Colorize};
use perfcmp_core::{Classification, ComparisonReport, ComparisonResult};

const WIDTH: usize = 80;

/// Render the comparison as terminal text.
pub fn render_console(report: &ComparisonReport, context: &ReportContext) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{}\n", "BENCHMARK COMPARISON".bold()));
    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!(
        "Current:   {} ({} benchmarks)\n",
        context.current, summary.total_benchmarks
    ));
    out.push_str(&format!(
        "Baseline:  {} ({} benchmarks)\n",
        context.baseline, summary.baseline_benchmarks
    ));
    out.push_str(&format!("Generated: {}\n", context.timestamp()));
    out.push_str(&format!("Threshold: {:.1}%\n", summary.threshold_pct));

    section(&mut out, "RESULTS:");
    if report.results.is_empty() {
        out.push_str("No benchmarks in common with the baseline.\n");
    }
    for result in &report.results {
        out.push_str(&format!("{}\n", result_line(result)));
    }

    if !report.stats.is_empty() {
        section(&mut out, "STATISTICS (current vs baseline):");
        for stat in &report.stats {
            out.push_str(&format!(
                "{} {:<7} {:>14.2} vs {:>14.2}\n",
                stat.metric, stat.stat, stat.current, stat.baseline
            ));
        }
    }

    if !report.resources.is_empty() {
        section(&mut out, "RESOURCE USAGE (current vs baseline):");
        for res in &report.resources {
            out.push_str(&format!(
                "{:<8} {:>10.2} vs {:>10.2}\n",
                res.metric, res.current, res.baseline
            ));
        }
    }

    let allocs = [
        ("current", &report.current_allocations),
        ("baseline", &report.baseline_allocations),
    ];
    if allocs.iter().any(|(_, p)| p.samples > 0) {
        section(&mut out, "ALLOCATIONS PER OP:");
        for (label, profile) in allocs {
            match (profile.mean, profile.min, profile.max) {
                (Some(mean), Some(min), Some(max)) => {
                    out.push_str(&format!(
                        "{:<8} {} samples, mean {:.1}, min {}, max {}\n",
                        label, profile.samples, mean, min, max
                    ));
                }
                _ => {
                    out.push_str(&format!("{:<8} no samples\n", label));
                }
            }
        }
    }

    section(&mut out, "SUMMARY:");
    out.push_str(&format!("Total Benchmarks:  {}\n", summary.total_benchmarks));
    out.push_str(&format!("Regressions:       {}\n", summary.regressions));
    out.push_str(&format!("Improvements:      {}\n", summary.improvements));
    out.push_str(&format!("No Change:         {}\n", summary.unchanged));
    if summary.skipped() > 0 {
        out.push_str(&format!(
            "Not Compared:      {} (no baseline or no timing)\n",
            summary.skipped()
        ));
    }
    let dropped = report.current_dropped + report.baseline_dropped;
    if dropped > 0 {
        out.push_str(&format!("Dropped Entries:   {}\n", dropped));
    }
    out.push_str(&format!(
        "Performance Score: {} (baseline {})\n",
        summary.current_score, summary.baseline_score
    ));
    out.push_str(&format!("Score Change:      {:+.2}\n", summary.score_delta));
    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
}

fn result_line(result: &ComparisonResult) -> String {
    format!(
        "[{}] {}: {:.2} -> {:.2} ns/op ({})",
        tag(result.classification),
        result.display_name(),
        result.baseline_ns,
        result.current_ns,
        signed_pct(result.change_pct)
    )
}

fn tag(classification: Classification) -> ColoredString {
    let label = format!("{:<11}", classification.as_str().to_uppercase());
    match classification {
        Classification::Regression => label.red().bold(),
        Classification::Improvement => label.green().bold(),
        Classification::Unchanged => label.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    fn plain() -> String {
        colored::control::set_override(false);
        render_console(&fixtures::report(), &fixtures::context())
    }

    #[test]
    fn test_results_use_display_names() {
        let text = plain();
        assert!(text.contains("[REGRESSION ] Schedule: 1000.00 -> 1200.00 ns/op (+20.0%)"));
        assert!(text.contains("[IMPROVEMENT] Route: 500.00 -> 400.00 ns/op (-20.0%)"));
        assert!(text.contains("[UNCHANGED  ] Health"));
    }

    #[test]
    fn test_summary_block() {
        let text = plain();
        assert!(text.contains("Total Benchmarks:  3"));
        assert!(text.contains("Regressions:       1"));
        assert!(text.contains("Improvements:      1"));
        assert!(text.contains("No Change:         1"));
        assert!(text.contains("Generated: 2025-03-01T12:00:00Z"));
    }

    #[test]
    fn test_optional_sections() {
        let text = plain();
        assert!(text.contains("STATISTICS"));
        assert!(text.contains("RESOURCE USAGE"));
        assert!(text.contains("CPU"));
        assert!(text.contains("ALLOCATIONS PER OP"));
    }
}
