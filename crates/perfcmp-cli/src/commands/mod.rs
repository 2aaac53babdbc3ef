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

//! CLI command implementations

mod compare;
mod completion;
mod inspect;
mod score;

pub use compare::{compare, CompareOptions};
pub use completion::{completion, installation_instructions};
pub use inspect::inspect;
pub use score::score;

use crate::error::CliError;
use perfcmp_core::{load_run, Run};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Load a benchmark report, tagging failures with the input's role.
///
/// Size limits come from `PERFCMP_MAX_FILE_SIZE` (see
/// [`perfcmp_core::max_file_size`]).
pub fn load_report(path: &Path, role: &'static str) -> Result<Run, CliError> {
    load_run(path).map_err(|e| CliError::load(role, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if file creation or writing fails, or stdout is closed.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::output(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::output("-", e))
        }
    }
}
