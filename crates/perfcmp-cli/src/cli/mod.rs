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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: comparison commands (compare, score, inspect)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

pub use self::core::CoreCommands;
pub use utility::UtilityCommands;

/// perfcmp - benchmark comparison and regression scoring
///
/// Compares a current benchmark report against a baseline, classifies each
/// benchmark as a regression, an improvement or unchanged, and scores both
/// runs.
///
/// # Examples
///
/// ```bash
/// # Console report with the default 5% threshold
/// perfcmp compare --current current.json --baseline baseline.json
///
/// # Markdown report for a CI comment, failing on regressions
/// perfcmp compare -c current.json -b baseline.json --format markdown \
///     --output report.md --fail-on-regression
///
/// # Score a single report
/// perfcmp score current.json
/// ```
#[derive(Parser)]
#[command(name = "perfcmp")]
#[command(author, version, about = "perfcmp - benchmark comparison and regression scoring", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (compare, score, inspect)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input cannot be loaded, the settings are invalid,
    /// the report cannot be written, or regressions were found under
    /// `--fail-on-regression`.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
