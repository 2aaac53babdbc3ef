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

//! Compare command - current report against a baseline

use super::{load_report, write_output};
use crate::error::CliError;
use crate::reporters::{self, OutputFormat, ReportContext};
use perfcmp_core::{analyze, CompareConfig};
use std::path::PathBuf;
use tracing::info;

/// Options for [`compare`].
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Current benchmark report.
    pub current: PathBuf,
    /// Baseline benchmark report.
    pub baseline: PathBuf,
    /// Regression/improvement threshold in percent.
    pub threshold_pct: f64,
    /// Nanoseconds of average latency per score point.
    pub score_scale_ns: f64,
    /// Rendering of the report.
    pub format: OutputFormat,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Fail when any benchmark regressed.
    pub fail_on_regression: bool,
}

/// Compare two benchmark reports and write the rendered result.
///
/// Settings are validated before either report is read. Both reports must
/// load; there is no comparison against a partially loaded run.
///
/// # Errors
///
/// Returns `Err` if:
/// - the threshold or score scale is invalid
/// - either report cannot be loaded
/// - the output cannot be written
/// - `fail_on_regression` is set and at least one benchmark regressed
///   (the report is still written first)
pub fn compare(options: &CompareOptions) -> Result<(), CliError> {
    let config =
        CompareConfig::new(options.threshold_pct).with_score_scale(options.score_scale_ns);
    config.validate()?;

    let current = load_report(&options.current, "current")?;
    let baseline = load_report(&options.baseline, "baseline")?;
    info!(
        current = current.len(),
        baseline = baseline.len(),
        "comparing benchmark runs"
    );

    let report = analyze(&current, &baseline, &config)?;
    info!(
        compared = report.summary.compared,
        regressions = report.summary.regressions,
        improvements = report.summary.improvements,
        score_delta = report.summary.score_delta,
        "comparison complete"
    );

    let context = ReportContext::new(&options.current, &options.baseline);
    let color = options.output.is_none();
    let rendered = reporters::render(&report, &context, options.format, color)?;
    write_output(&rendered, options.output.as_deref())?;

    if options.fail_on_regression && report.has_regressions() {
        return Err(CliError::RegressionsFound {
            count: report.summary.regressions,
            threshold_pct: report.config.threshold_pct,
        });
    }
    Ok(())
}
