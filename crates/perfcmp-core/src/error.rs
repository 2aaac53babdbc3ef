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

//! Error types for loading runs and validating comparison settings.
//!
//! Loading a document is the only fallible step of a comparison. Everything
//! downstream of a successfully loaded [`Run`](crate::Run) is total: missing
//! pairs and zero timings are skipped, never reported as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// A benchmark document could not be turned into a [`Run`](crate::Run).
///
/// The caller is expected to abort the comparison for that input; there is
/// no partially loaded run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The file is larger than the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The document is not well-formed JSON.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// The document root is not a JSON object.
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// A top-level section has the wrong shape.
    #[error("Invalid '{section}' section: {reason}")]
    InvalidSection {
        /// Section key, e.g. `benchmarks`
        section: String,
        /// What was wrong with it
        reason: String,
    },
}

impl LoadError {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
        }
    }

    /// Create an invalid-section error.
    pub fn invalid_section(section: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSection {
            section: section.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Comparison settings that cannot produce a meaningful classification.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Threshold must be finite and non-negative.
    #[error("Invalid threshold {0}%: must be a finite, non-negative percentage")]
    InvalidThreshold(f64),

    /// Score scale must be finite and positive.
    #[error("Invalid score scale {0}ns: must be a finite, positive number")]
    InvalidScoreScale(f64),
}
