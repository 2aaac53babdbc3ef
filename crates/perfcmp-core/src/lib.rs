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

//! Benchmark comparison and regression scoring.
//!
//! Loads two benchmark runs (a *current* run and a *baseline* run), pairs
//! their measurements by name, classifies every pair as a regression, an
//! improvement or unchanged, and scores each run on a 0-100 scale.
//!
//! ## Pipeline
//!
//! - [`loader`]: JSON documents into immutable [`Run`] values
//! - [`engine`]: per-benchmark deltas, classification and run scores
//! - [`summary`]: run-level counts and score delta
//! - [`supplemental`]: statistics, resource usage and allocation profiles
//! - [`report`]: everything above bundled into one [`ComparisonReport`]
//!
//! Nothing in this crate prints or writes files; rendering is left to the
//! caller.
//!
//! ## Usage
//!
//! ```no_run
//! use perfcmp_core::{analyze, load_run, CompareConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let current = load_run("current.json")?;
//! let baseline = load_run("baseline.json")?;
//!
//! let report = analyze(&current, &baseline, &CompareConfig::default())?;
//! println!(
//!     "{} regressions, score {} -> {}",
//!     report.summary.regressions, report.summary.baseline_score, report.summary.current_score
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod summary;
pub mod supplemental;

pub use config::{
    CompareConfig, DEFAULT_MAX_FILE_SIZE, DEFAULT_SCORE_SCALE_NS, DEFAULT_THRESHOLD_PCT,
};
pub use engine::{
    change_pct, classify, compare, score, score_with_scale, Classification, ComparisonResult,
    Score,
};
pub use error::{ConfigError, LoadError, Result};
pub use loader::{
    load_run, load_run_from_reader, load_run_from_slice, load_run_from_str, max_file_size,
};
pub use model::{Measurement, ResourceReading, Run, StatSummary};
pub use report::{analyze, ComparisonReport};
pub use summary::{summarize, Summary};
pub use supplemental::{
    allocation_profile, compare_resources, compare_stats, AllocationProfile, ResourceComparison,
    StatComparison, RESOURCE_METRICS, STAT_KINDS, STAT_METRICS,
};
