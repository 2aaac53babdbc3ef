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

//! Comparison configuration.
//!
//! Holds the tunable constants of a comparison: the symmetric regression
//! threshold and the latency scale used to turn an average `ns/op` into a
//! 0-100 score.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default regression/improvement threshold, in percent.
pub const DEFAULT_THRESHOLD_PCT: f64 = 5.0;

/// Default score calibration: every `DEFAULT_SCORE_SCALE_NS` nanoseconds of
/// average latency costs one score point.
pub const DEFAULT_SCORE_SCALE_NS: f64 = 1000.0;

/// Default maximum input document size (100 MB).
///
/// Can be overridden via the `PERFCMP_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Settings for comparing a current run against a baseline.
///
/// # Example
///
/// ```
/// use perfcmp_core::CompareConfig;
///
/// let config = CompareConfig::default()
///     .with_threshold(10.0)
///     .with_score_scale(500.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Percentage change beyond which a benchmark counts as regressed or improved.
    pub threshold_pct: f64,
    /// Nanoseconds of average latency per score point.
    pub score_scale_ns: f64,
}

impl CompareConfig {
    /// Creates a configuration with the given threshold and the default score scale.
    pub fn new(threshold_pct: f64) -> Self {
        Self {
            threshold_pct,
            score_scale_ns: DEFAULT_SCORE_SCALE_NS,
        }
    }

    /// Sets the regression threshold.
    pub fn with_threshold(mut self, threshold_pct: f64) -> Self {
        self.threshold_pct = threshold_pct;
        self
    }

    /// Sets the score calibration scale.
    pub fn with_score_scale(mut self, score_scale_ns: f64) -> Self {
        self.score_scale_ns = score_scale_ns;
        self
    }

    /// Checks that the threshold and scale can classify and score anything.
    ///
    /// A negative threshold would make the regression and improvement bands
    /// overlap; a non-positive scale would make the score meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold_pct.is_finite() || self.threshold_pct < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold_pct));
        }
        if !self.score_scale_ns.is_finite() || self.score_scale_ns <= 0.0 {
            return Err(ConfigError::InvalidScoreScale(self.score_scale_ns));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PCT)
    }
}
