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

//! Run scoring.
//!
//! The score is a deliberately simple linear, inverted, clamped scale:
//!
//! ```text
//! score = clamp(100 - avg_ns / scale_ns, 0, 100)
//! ```
//!
//! where `avg_ns` is the mean `ns_per_op` over measurements with a positive
//! timing. A run with no positive timing scores 0.

use crate::config::DEFAULT_SCORE_SCALE_NS;
use crate::model::Run;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the score range.
pub const MAX_SCORE: f64 = 100.0;

/// Synthetic 0-100 latency score of a run; higher is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// The score of a run with no usable timings.
    pub const ZERO: Score = Score(0.0);

    /// Returns the score value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Scores a run with the default calibration of 1000 ns per point.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{score, Measurement, Run};
///
/// let run = Run::new(vec![Measurement::new("a", 10_000.0), Measurement::new("b", 30_000.0)]);
/// assert_eq!(score(&run).value(), 80.0);
/// ```
pub fn score(run: &Run) -> Score {
    score_with_scale(run, DEFAULT_SCORE_SCALE_NS)
}

/// Scores a run with a custom calibration scale.
///
/// A non-positive or non-finite scale yields [`Score::ZERO`].
pub fn score_with_scale(run: &Run, scale_ns: f64) -> Score {
    if !scale_ns.is_finite() || scale_ns <= 0.0 {
        return Score::ZERO;
    }

    let (sum, count) = run
        .timed()
        .fold((0.0_f64, 0_usize), |(sum, count), m| (sum + m.ns_per_op, count + 1));

    if count == 0 {
        return Score::ZERO;
    }

    let avg_ns = sum / count as f64;
    // An overflowing sum makes `raw` -inf, which clamps to 0.
    let raw = MAX_SCORE - avg_ns / scale_ns;
    Score(raw.clamp(0.0, MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;

    #[test]
    fn test_empty_run_scores_zero() {
        assert_eq!(score(&Run::default()), Score::ZERO);
    }

    #[test]
    fn test_all_zero_timings_score_zero() {
        let run = Run::new(vec![Measurement::new("a", 0.0), Measurement::new("b", 0.0)]);
        assert_eq!(score(&run).value(), 0.0);
    }

    #[test]
    fn test_linear_scale() {
        let run = Run::new(vec![Measurement::new("a", 25_000.0)]);
        assert_eq!(score(&run).value(), 75.0);
    }

    #[test]
    fn test_ignores_non_positive_in_mean() {
        let run = Run::new(vec![
            Measurement::new("a", 10_000.0),
            Measurement::new("b", 0.0),
            Measurement::new("c", -50_000.0),
        ]);
        assert_eq!(score(&run).value(), 90.0);
    }

    #[test]
    fn test_clamped_at_zero_for_slow_runs() {
        let run = Run::new(vec![Measurement::new("a", 5_000_000.0)]);
        assert_eq!(score(&run).value(), 0.0);
    }

    #[test]
    fn test_overflowing_sum_scores_zero() {
        let run = Run::new(vec![Measurement::new("a", 1e308), Measurement::new("b", 1e308)]);
        assert_eq!(score(&run), Score::ZERO);
    }

    #[test]
    fn test_near_zero_latency_approaches_max() {
        let run = Run::new(vec![Measurement::new("a", 0.001)]);
        let s = score(&run).value();
        assert!(s < MAX_SCORE && s > 99.99);
    }

    #[test]
    fn test_custom_scale() {
        let run = Run::new(vec![Measurement::new("a", 500.0)]);
        assert_eq!(score_with_scale(&run, 10.0).value(), 50.0);
        assert_eq!(score_with_scale(&run, 0.0), Score::ZERO);
    }

    #[test]
    fn test_display() {
        let run = Run::new(vec![Measurement::new("a", 1_234.0)]);
        assert_eq!(score(&run).to_string(), "98.77");
    }
}
