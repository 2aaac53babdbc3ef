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

//! Report renderers.
//!
//! Each renderer turns a [`ComparisonReport`] plus its [`ReportContext`]
//! into a complete document held in memory. Writing is left to the caller.

mod console;
mod json;
mod markdown;

pub use console::render_console;
pub use json::render_json;
pub use markdown::render_markdown;

use crate::error::CliError;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use perfcmp_core::ComparisonReport;
use std::path::Path;

/// Output format for the compare command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colored classifications.
    #[default]
    Console,
    /// Pretty-printed JSON document.
    Json,
    /// Markdown tables, suitable for CI comments.
    Markdown,
}

/// Where the compared reports came from and when the comparison ran.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub current: String,
    pub baseline: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportContext {
    /// Context for the given input paths, stamped with the current time.
    pub fn new(current: &Path, baseline: &Path) -> Self {
        Self::at(current, baseline, Utc::now())
    }

    pub fn at(current: &Path, baseline: &Path, generated_at: DateTime<Utc>) -> Self {
        Self {
            current: current.display().to_string(),
            baseline: baseline.display().to_string(),
            generated_at,
        }
    }

    /// RFC 3339 timestamp with second precision.
    pub fn timestamp(&self) -> String {
        self.generated_at
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

/// Render `report` in the requested format.
///
/// `color` only affects the console format. It is switched off globally
/// when false so that files never receive escape sequences.
pub fn render(
    report: &ComparisonReport,
    context: &ReportContext,
    format: OutputFormat,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Console => {
            if !color {
                colored::control::set_override(false);
            }
            Ok(render_console(report, context))
        }
        OutputFormat::Json => Ok(render_json(report, context)?),
        OutputFormat::Markdown => Ok(render_markdown(report, context)),
    }
}

/// Signed percentage with one decimal, e.g. `+20.0%`.
pub(crate) fn signed_pct(value: f64) -> String {
    format!("{:+.1}%", value)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ReportContext;
    use chrono::{TimeZone, Utc};
    use perfcmp_core::{
        analyze, CompareConfig, ComparisonReport, Measurement, ResourceReading, Run, StatSummary,
    };
    use std::path::Path;

    pub fn context() -> ReportContext {
        let at = Utc
            .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        ReportContext::at(Path::new("current.json"), Path::new("baseline.json"), at)
    }

    pub fn report() -> ComparisonReport {
        let stat = StatSummary {
            mean: Some(1100.0),
            median: Some(1000.0),
            min: Some(900.0),
            max: Some(1500.0),
        };
        let current = Run::new(vec![
            Measurement::new("BenchmarkSchedule", 1200.0).with_allocs(4),
            Measurement::new("BenchmarkRoute", 400.0).with_allocs(2),
            Measurement::new("BenchmarkHealth", 100.0),
        ])
        .with_stat("ns_per_op", stat.clone())
        .with_reading(ResourceReading::new("CPU", "40"));
        let baseline = Run::new(vec![
            Measurement::new("BenchmarkSchedule", 1000.0).with_allocs(4),
            Measurement::new("BenchmarkRoute", 500.0),
            Measurement::new("BenchmarkHealth", 101.0),
        ])
        .with_stat("ns_per_op", stat)
        .with_reading(ResourceReading::new("CPU", "35"));

        analyze(&current, &baseline, &CompareConfig::default()).expect("valid config")
    }
}
