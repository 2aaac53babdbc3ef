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

//! Comparison engine.
//!
//! Pairs current and baseline measurements, classifies each pair against a
//! symmetric percentage threshold, and scores whole runs.
//!
//! # Modules
//!
//! - `compare`: name matching, percentage deltas and classification
//! - `score`: the 0-100 latency score of a run

pub mod compare;
pub mod score;

pub use compare::{change_pct, classify, compare, Classification, ComparisonResult};
pub use score::{score, score_with_scale, Score};
