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

//! JSON reporter.

use super::ReportContext;
use perfcmp_core::ComparisonReport;
use serde_json::json;

/// Render the comparison as a pretty-printed JSON document.
///
/// The report fields sit under `report`; `metadata` carries the inputs and
/// the generation time.
pub fn render_json(
    report: &ComparisonReport,
    context: &ReportContext,
) -> Result<String, serde_json::Error> {
    let doc = json!({
        "metadata": {
            "generated_at": context.timestamp(),
            "current": context.current,
            "baseline": context.baseline,
            "tool_version": env!("CARGO_PKG_VERSION"),
        },
        "report": serde_json::to_value(report)?,
    });
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}
