//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the data was fetched
    pub fetched_at: String,

    /// Number of records in `data`
    pub count: usize,

    /// Client version
    pub version: String,
}

/// Format a list as pretty-printed JSON with metadata
pub fn format_json<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        data: items,
        meta: Metadata {
            fetched_at: Utc::now().to_rfc3339(),
            count: items.len(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    serde_json::to_string_pretty(&output)
}
