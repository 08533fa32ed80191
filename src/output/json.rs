//! JSON serialization for benchmark summaries.

use crate::statistics::BenchmarkResults;

/// Serialize a summary to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchmarkResults`).
pub fn to_json(results: &BenchmarkResults) -> Result<String, serde_json::Error> {
    serde_json::to_string(results)
}

/// Serialize a summary to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BenchmarkResults`).
pub fn to_json_pretty(results: &BenchmarkResults) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
