// ABOUTME: ToolResult - the JSON text a news tool produces for the client, plus
// ABOUTME: counters the server logs after the call. Failures travel as ToolError.

use serde::Serialize;
use serde_json::{Map, Value};

/// Successful output of a tool call.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Serialized headlines document, sent as the single text block.
    pub content: String,

    /// Counters for the server log (`headline_count`, `failed_sources`).
    /// Never sent to clients.
    pub metadata: Map<String, Value>,
}

impl ToolResult {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Map::new(),
        }
    }

    /// Attach a log field. Values that fail to serialize are skipped.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), value);
        }
        self
    }
}
