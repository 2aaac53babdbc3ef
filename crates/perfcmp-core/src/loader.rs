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

//! Report loader: benchmark documents into [`Run`] values.
//!
//! A document is a JSON object with three optional sections:
//!
//! ```json
//! {
//!   "benchmarks": [{"name": "BenchmarkParse", "ns_per_op": 1520.0, "allocs_per_op": 3}],
//!   "performance_stats": {"ns_per_op": {"mean": 1520.0, "median": 1500.0, "min": 900.0, "max": 2100.0}},
//!   "performance_metrics": [{"metric": "CPU", "value": "37.5"}]
//! }
//! ```
//!
//! Only the document structure is checked here. A section with the wrong
//! shape fails the whole load, while an individual malformed entry is a
//! data-quality problem: it is dropped (or zeroed) and the load carries on.
//!
//! | Entry problem                          | Outcome                              |
//! |----------------------------------------|--------------------------------------|
//! | benchmark without a string `name`      | dropped, counted in `dropped_entries`|
//! | missing / non-numeric `ns_per_op`      | kept with `ns_per_op = 0.0`          |
//! | negative or fractional `allocs_per_op` | kept with `allocs_per_op = None`     |
//! | metric reading without `metric`/`value`| dropped                              |

use crate::config::DEFAULT_MAX_FILE_SIZE;
use crate::error::{LoadError, Result};
use crate::model::{Measurement, ResourceReading, Run, StatSummary};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "PERFCMP_MAX_FILE_SIZE";

/// Returns the maximum accepted document size in bytes.
///
/// Reads `PERFCMP_MAX_FILE_SIZE`, falling back to [`DEFAULT_MAX_FILE_SIZE`]
/// when the variable is unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Loads a run from a JSON file.
///
/// The file size is checked against [`max_file_size`] before anything is
/// read, then the file is read in one pass.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is missing, unreadable, too large, not
/// valid JSON, or structurally not a benchmark document.
///
/// # Examples
///
/// ```no_run
/// use perfcmp_core::load_run;
///
/// let run = load_run("reports/current.json").expect("readable report");
/// println!("{} benchmarks", run.len());
/// ```
pub fn load_run(path: impl AsRef<Path>) -> Result<Run> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| LoadError::io(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(LoadError::file_too_large(path, metadata.len(), max));
    }

    let bytes = fs::read(path).map_err(|e| LoadError::io(path, e))?;
    let run = load_run_from_slice(&bytes)?;
    info!(
        path = %path.display(),
        benchmarks = run.len(),
        dropped = run.dropped_entries,
        "loaded benchmark run"
    );
    Ok(run)
}

/// Loads a run from a JSON string.
pub fn load_run_from_str(json: &str) -> Result<Run> {
    let value: Value = serde_json::from_str(json)?;
    run_from_value(value)
}

/// Loads a run from JSON bytes.
pub fn load_run_from_slice(bytes: &[u8]) -> Result<Run> {
    let value: Value = serde_json::from_slice(bytes)?;
    run_from_value(value)
}

/// Loads a run from any reader, consuming it to the end.
pub fn load_run_from_reader<R: Read>(reader: R) -> Result<Run> {
    let value: Value = serde_json::from_reader(reader)?;
    run_from_value(value)
}

fn run_from_value(value: Value) -> Result<Run> {
    let Value::Object(mut root) = value else {
        return Err(LoadError::InvalidRoot(json_type_name(&value).to_string()));
    };

    let benchmarks = take_array(&mut root, "benchmarks")?;
    let mut measurements = Vec::with_capacity(benchmarks.len());
    let mut dropped_entries = 0;
    for (index, entry) in benchmarks.into_iter().enumerate() {
        match measurement_from_value(entry) {
            Some(m) => measurements.push(m),
            None => {
                warn!(index, "dropping benchmark entry without a usable name");
                dropped_entries += 1;
            }
        }
    }

    let performance_stats = stats_from_section(&mut root)?;

    let performance_metrics = take_array(&mut root, "performance_metrics")?
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let reading = reading_from_value(&entry);
            if reading.is_none() {
                warn!(index, "dropping malformed performance metric entry");
            }
            reading
        })
        .collect();

    Ok(Run {
        measurements,
        performance_stats,
        performance_metrics,
        dropped_entries,
    })
}

/// Removes an optional array section from the root object.
fn take_array(root: &mut Map<String, Value>, section: &str) -> Result<Vec<Value>> {
    match root.remove(section) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(LoadError::invalid_section(
            section,
            format!("expected an array, found {}", json_type_name(&other)),
        )),
    }
}

fn stats_from_section(root: &mut Map<String, Value>) -> Result<BTreeMap<String, StatSummary>> {
    let section = match root.remove("performance_stats") {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(LoadError::invalid_section(
                "performance_stats",
                format!("expected an object, found {}", json_type_name(&other)),
            ))
        }
    };

    let mut stats = BTreeMap::new();
    for (metric, value) in section {
        let Value::Object(fields) = value else {
            warn!(metric = %metric, "ignoring non-object performance stat");
            continue;
        };
        let number = |key: &str| fields.get(key).and_then(Value::as_f64);
        stats.insert(
            metric,
            StatSummary {
                mean: number("mean"),
                median: number("median"),
                min: number("min"),
                max: number("max"),
            },
        );
    }
    Ok(stats)
}

fn measurement_from_value(entry: Value) -> Option<Measurement> {
    let Value::Object(fields) = entry else {
        return None;
    };
    let name = fields.get("name")?.as_str()?.to_string();

    let ns_per_op = match fields.get("ns_per_op").and_then(Value::as_f64) {
        Some(ns) => ns,
        None => {
            debug!(benchmark = %name, "no numeric ns_per_op, loading as zero");
            0.0
        }
    };

    Some(Measurement {
        name,
        ns_per_op,
        allocs_per_op: fields.get("allocs_per_op").and_then(alloc_count),
    })
}

/// Accepts non-negative integers, including integral floats such as `3.0`.
fn alloc_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

fn reading_from_value(entry: &Value) -> Option<ResourceReading> {
    let metric = entry.get("metric")?.as_str()?;
    let value = match entry.get("value")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(ResourceReading::new(metric, value))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_document() {
        let json = r#"{
            "benchmarks": [
                {"name": "BenchmarkA", "ns_per_op": 100.5, "allocs_per_op": 2},
                {"name": "BenchmarkB", "ns_per_op": 200}
            ],
            "performance_stats": {
                "ns_per_op": {"mean": 150.0, "median": 150.0, "min": 100.5, "max": 200.0}
            },
            "performance_metrics": [
                {"metric": "CPU", "value": "45.2"},
                {"metric": "Memory", "value": 512}
            ]
        }"#;

        let run = load_run_from_str(json).unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.measurements[0].name, "BenchmarkA");
        assert_eq!(run.measurements[0].ns_per_op, 100.5);
        assert_eq!(run.measurements[0].allocs_per_op, Some(2));
        assert_eq!(run.measurements[1].allocs_per_op, None);
        assert_eq!(run.performance_stats["ns_per_op"].median, Some(150.0));
        assert_eq!(run.performance_metrics.len(), 2);
        assert_eq!(run.performance_metrics[1].value, "512");
        assert_eq!(run.dropped_entries, 0);
    }

    #[test]
    fn test_empty_object_is_empty_run() {
        let run = load_run_from_str("{}").unwrap();
        assert!(run.is_empty());
        assert!(run.performance_stats.is_empty());
        assert!(run.performance_metrics.is_empty());
    }

    #[test]
    fn test_null_sections_are_empty() {
        let run = load_run_from_str(
            r#"{"benchmarks": null, "performance_stats": null, "performance_metrics": null}"#,
        )
        .unwrap();
        assert!(run.is_empty());
    }

    #[test]
    fn test_preserves_document_order() {
        let run = load_run_from_str(
            r#"{"benchmarks": [{"name": "z", "ns_per_op": 1}, {"name": "a", "ns_per_op": 2}, {"name": "m", "ns_per_op": 3}]}"#,
        )
        .unwrap();
        let names: Vec<_> = run.measurements.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = load_run_from_str("{\"benchmarks\": [").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_non_object_root_fails() {
        let err = load_run_from_str("[1, 2, 3]").unwrap_err();
        assert_eq!(err, LoadError::InvalidRoot("array".to_string()));
    }

    #[test]
    fn test_wrong_section_shape_fails() {
        let err = load_run_from_str(r#"{"benchmarks": {"name": "a"}}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidSection { ref section, .. } if section == "benchmarks"
        ));

        let err = load_run_from_str(r#"{"performance_stats": [1]}"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSection { .. }));
    }

    #[test]
    fn test_entry_without_name_is_dropped() {
        let run = load_run_from_str(
            r#"{"benchmarks": [{"ns_per_op": 10}, {"name": 42, "ns_per_op": 5}, "junk", {"name": "ok", "ns_per_op": 1}]}"#,
        )
        .unwrap();
        assert_eq!(run.len(), 1);
        assert_eq!(run.measurements[0].name, "ok");
        assert_eq!(run.dropped_entries, 3);
    }

    #[test]
    fn test_non_numeric_timing_loads_as_zero() {
        let run = load_run_from_str(
            r#"{"benchmarks": [{"name": "a", "ns_per_op": "fast"}, {"name": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(run.len(), 2);
        assert!(run.measurements.iter().all(|m| m.ns_per_op == 0.0));
    }

    #[test]
    fn test_alloc_count_parsing() {
        let run = load_run_from_str(
            r#"{"benchmarks": [
                {"name": "a", "ns_per_op": 1, "allocs_per_op": 3.0},
                {"name": "b", "ns_per_op": 1, "allocs_per_op": -1},
                {"name": "c", "ns_per_op": 1, "allocs_per_op": 2.5},
                {"name": "d", "ns_per_op": 1, "allocs_per_op": "7"}
            ]}"#,
        )
        .unwrap();
        let allocs: Vec<_> = run.measurements.iter().map(|m| m.allocs_per_op).collect();
        assert_eq!(allocs, vec![Some(3), None, None, None]);
    }

    #[test]
    fn test_malformed_metric_readings_dropped() {
        let run = load_run_from_str(
            r#"{"performance_metrics": [
                {"metric": "CPU"},
                {"value": "1"},
                {"metric": "Network", "value": true},
                {"metric": "Memory", "value": "n/a"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(run.performance_metrics.len(), 1);
        assert_eq!(run.performance_metrics[0].metric, "Memory");
        assert_eq!(run.performance_metrics[0].numeric(), None);
    }

    #[test]
    fn test_stat_with_non_numeric_field() {
        let run = load_run_from_str(
            r#"{"performance_stats": {"ns_per_op": {"mean": "x", "max": 4}, "bogus": 3}}"#,
        )
        .unwrap();
        assert_eq!(run.performance_stats.len(), 1);
        let stats = &run.performance_stats["ns_per_op"];
        assert_eq!(stats.mean, None);
        assert_eq!(stats.max, Some(4.0));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"benchmarks": [{{"name": "a", "ns_per_op": 12.0}}]}}"#
        )
        .unwrap();

        let run = load_run(file.path()).unwrap();
        assert_eq!(run.len(), 1);
    }

    #[test]
    fn test_load_from_reader() {
        let data = br#"{"benchmarks": [{"name": "a", "ns_per_op": 1}]}"#;
        let run = load_run_from_reader(&data[..]).unwrap();
        assert_eq!(run.len(), 1);
    }

    #[test]
    fn test_timings_load_exactly() {
        let expected = ((101.0_f64 - 100.0) / 101.0 * 100.0).abs();
        let json = format!(r#"{{"benchmarks": [{{"name": "a", "ns_per_op": {expected}}}]}}"#);
        let run = load_run_from_str(&json).unwrap();
        assert_eq!(run.measurements[0].ns_per_op, expected);
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_run("/nonexistent/perfcmp/report.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
