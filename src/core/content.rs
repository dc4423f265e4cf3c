//! Rendering of tool output into the text payload handed back to the host.

use serde_json::Value as JsonValue;

/// Indented (2-space) JSON, the single text block every successful tool returns.
pub fn pretty_text(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
