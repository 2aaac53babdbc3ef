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

//! Score command - latency score of a single report

use super::{load_report, write_output};
use crate::error::CliError;
use perfcmp_core::{score_with_scale, CompareConfig};
use std::path::Path;

/// Print the 0-100 latency score of a benchmark report.
///
/// Prints the score with two decimals followed by the number of benchmarks
/// that contributed a positive timing.
///
/// # Errors
///
/// Returns `Err` if the scale is invalid or the report cannot be loaded.
pub fn score(file: &Path, score_scale_ns: f64) -> Result<(), CliError> {
    CompareConfig::default()
        .with_score_scale(score_scale_ns)
        .validate()?;

    let run = load_report(file, "input")?;
    let score = score_with_scale(&run, score_scale_ns);
    let timed = run.timed().count();

    write_output(
        &format!("{score} ({timed} of {} benchmarks timed)\n", run.len()),
        None,
    )
}
