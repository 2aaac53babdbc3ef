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

//! Structured error types for the perfcmp CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error and
//! exits with a failure status.

use perfcmp_core::{ConfigError, LoadError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for perfcmp CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// One of the input reports could not be loaded.
    ///
    /// `role` names which input failed (`current`, `baseline` or `input`).
    #[error("Failed to load {role} report: {source}")]
    Load {
        role: &'static str,
        #[source]
        source: LoadError,
    },

    /// Threshold or score scale rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the rendered report failed.
    #[error("Failed to write '{path}': {message}")]
    Output {
        /// Destination path, or `-` for stdout
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization of a report failed.
    #[error("JSON format error: {0}")]
    Json(String),

    /// Regressions were found and the caller asked to fail on them.
    ///
    /// Returned by `compare --fail-on-regression`.
    #[error("{count} benchmark(s) regressed by more than {threshold_pct}%")]
    RegressionsFound {
        /// Number of regressed benchmarks
        count: usize,
        /// Threshold used for classification
        threshold_pct: f64,
    },
}

impl CliError {
    /// Create a load error for the named input.
    pub fn load(role: &'static str, source: LoadError) -> Self {
        Self::Load { role, source }
    }

    /// Create an output error with path context.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}
