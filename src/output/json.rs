//! JSON serialization for study summaries.

use crate::study::StudySummary;

/// Serialize a StudySummary to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// StudySummary).
pub fn to_json(summary: &StudySummary) -> Result<String, serde_json::Error> {
    serde_json::to_string(summary)
}

/// Serialize a StudySummary to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// StudySummary).
pub fn to_json_pretty(summary: &StudySummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
