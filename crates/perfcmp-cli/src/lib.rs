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

//! perfcmp CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **compare**: Compare a current benchmark report against a baseline
//! - **score**: Print the 0-100 latency score of a single report
//! - **inspect**: Show what the loader read from a report
//! - **completion**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use perfcmp_cli::commands::{compare, CompareOptions};
//! use perfcmp_cli::reporters::OutputFormat;
//!
//! # fn main() -> Result<(), perfcmp_cli::error::CliError> {
//! compare(&CompareOptions {
//!     current: "current.json".into(),
//!     baseline: "baseline.json".into(),
//!     threshold_pct: 5.0,
//!     score_scale_ns: 1000.0,
//!     format: OutputFormat::Markdown,
//!     output: Some("report.md".into()),
//!     fail_on_regression: true,
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `PERFCMP_MAX_FILE_SIZE`: maximum input report size in bytes (default 100 MB)
//! - `RUST_LOG`: log filter, e.g. `perfcmp=debug` (logs go to stderr)

pub mod cli;
pub mod commands;
pub mod error;
pub mod reporters;
