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

//! Markdown reporter.

use super::{signed_pct, ReportContext};
use perfcmp_core::{Classification, ComparisonReport};

/// Render the comparison as a Markdown document.
pub fn render_markdown(report: &ComparisonReport, context: &ReportContext) -> String {
    let mut md = String::new();
    let summary = &report.summary;

    md.push_str("# Benchmark Comparison\n\n");
    md.push_str(&format!("**Generated:** {}\n\n", context.timestamp()));
    md.push_str(&format!("**Current:** `{}`\n\n", context.current));
    md.push_str(&format!("**Baseline:** `{}`\n\n", context.baseline));
    md.push_str(&format!("**Threshold:** {:.1}%\n\n", summary.threshold_pct));

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n|--------|-------|\n");
    md.push_str(&format!("| Total benchmarks | {} |\n", summary.total_benchmarks));
    md.push_str(&format!("| Baseline benchmarks | {} |\n", summary.baseline_benchmarks));
    md.push_str(&format!("| Regressions | {} |\n", summary.regressions));
    md.push_str(&format!("| Improvements | {} |\n", summary.improvements));
    md.push_str(&format!("| No change | {} |\n", summary.unchanged));
    md.push_str(&format!("| Current score | {} |\n", summary.current_score));
    md.push_str(&format!("| Baseline score | {} |\n", summary.baseline_score));
    md.push_str(&format!("| Score change | {:+.2} |\n", summary.score_delta));

    md.push_str("\n## Results\n\n");
    if report.results.is_empty() {
        md.push_str("No benchmarks in common with the baseline.\n");
    } else {
        md.push_str("| Benchmark | Baseline (ns/op) | Current (ns/op) | Change | Status |\n");
        md.push_str("|-----------|------------------|-----------------|--------|--------|\n");
        for r in &report.results {
            let status = match r.classification {
                Classification::Regression => "🔴 regression",
                Classification::Improvement => "🟢 improvement",
                Classification::Unchanged => "unchanged",
            };
            md.push_str(&format!(
                "| {} | {:.2} | {:.2} | {} | {} |\n",
                r.display_name(), r.baseline_ns, r.current_ns, signed_pct(r.change_pct), status
            ));
        }
    }

    if !report.stats.is_empty() {
        md.push_str("\n## Statistics\n\n");
        md.push_str("| Metric | Stat | Current | Baseline |\n");
        md.push_str("|--------|------|---------|----------|\n");
        for s in &report.stats {
            md.push_str(&format!(
                "| {} | {} | {:.2} | {:.2} |\n",
                s.metric, s.stat, s.current, s.baseline
            ));
        }
    }

    if !report.resources.is_empty() {
        md.push_str("\n## Resource Usage\n\n");
        md.push_str("| Metric | Current | Baseline |\n|--------|---------|----------|\n");
        for r in &report.resources {
            md.push_str(&format!("| {} | {:.2} | {:.2} |\n", r.metric, r.current, r.baseline));
        }
    }

    md
}
