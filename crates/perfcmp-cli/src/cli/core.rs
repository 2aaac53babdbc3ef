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

//! Comparison commands: compare, score and inspect.

use crate::commands::{self, CompareOptions};
use crate::error::CliError;
use crate::reporters::OutputFormat;
use clap::Subcommand;
use perfcmp_core::{DEFAULT_SCORE_SCALE_NS, DEFAULT_THRESHOLD_PCT};
use std::path::PathBuf;

/// Core perfcmp commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Compare a current benchmark report against a baseline
    ///
    /// Benchmarks are matched by exact name. A benchmark slower than its
    /// baseline by more than the threshold is a regression; faster by more
    /// than the threshold is an improvement.
    Compare {
        /// Current benchmark report (JSON)
        #[arg(short, long, value_name = "FILE")]
        current: PathBuf,

        /// Baseline benchmark report (JSON)
        #[arg(short, long, value_name = "FILE")]
        baseline: PathBuf,

        /// Regression/improvement threshold in percent
        #[arg(
            short,
            long,
            value_name = "PCT",
            default_value_t = DEFAULT_THRESHOLD_PCT,
            allow_negative_numbers = true
        )]
        threshold: f64,

        /// Nanoseconds of average latency per score point
        #[arg(long, value_name = "NS", default_value_t = DEFAULT_SCORE_SCALE_NS)]
        score_scale: f64,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Exit with failure when any benchmark regressed
        #[arg(long)]
        fail_on_regression: bool,
    },

    /// Print the latency score of a single benchmark report
    Score {
        /// Benchmark report (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Nanoseconds of average latency per score point
        #[arg(long, value_name = "NS", default_value_t = DEFAULT_SCORE_SCALE_NS)]
        score_scale: f64,
    },

    /// Show what was loaded from a benchmark report
    ///
    /// Lists benchmark counts, entries dropped as malformed, and the
    /// statistics and resource metrics the report carries.
    Inspect {
        /// Benchmark report (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Compare {
                current,
                baseline,
                threshold,
                score_scale,
                format,
                output,
                fail_on_regression,
            } => commands::compare(&CompareOptions {
                current,
                baseline,
                threshold_pct: threshold,
                score_scale_ns: score_scale,
                format,
                output,
                fail_on_regression,
            }),
            CoreCommands::Score { file, score_scale } => commands::score(&file, score_scale),
            CoreCommands::Inspect { file } => commands::inspect(&file),
        }
    }
}
