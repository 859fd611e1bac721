// ABOUTME: Defines the Tool trait - one operation exposed over MCP.
// ABOUTME: Tools have a name, description, input schema, and async execute method.

use async_trait::async_trait;

use super::ToolResult;
use crate::error::ToolError;

/// An operation callable through `tools/call`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for clients.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError>;
}
