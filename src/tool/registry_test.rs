// ABOUTME: Tests for tool Registry - registration, lookup, descriptors.
// ABOUTME: Uses small mock tools for testing.

use super::*;
use crate::error::ToolError;

/// A simple test tool.
struct EchoTool;

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes input back"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let message = params["message"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParams("missing field `message`".into()))?;
        Ok(ToolResult::text(message))
    }
}

struct AlphaTool;

#[async_trait::async_trait]
impl Tool for AlphaTool {
    fn name(&self) -> &str {
        "alpha"
    }

    fn description(&self) -> &str {
        "First alphabetically"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::text("alpha"))
    }
}

#[tokio::test]
async fn test_register_and_get() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let tool = registry.get("echo").await;
    assert!(tool.is_some());
    assert_eq!(tool.unwrap().name(), "echo");
}

#[tokio::test]
async fn test_get_nonexistent() {
    let registry = Registry::new();
    let tool = registry.get("nonexistent").await;
    assert!(tool.is_none());
}

#[tokio::test]
async fn test_to_tool_infos() {
    let registry = Registry::new();
    registry.register(EchoTool).await;
    registry.register(AlphaTool).await;

    let infos = registry.to_tool_infos().await;
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].name, "alpha");
    assert_eq!(infos[1].name, "echo");
    assert_eq!(infos[1].description, "Echoes input back");
    assert_eq!(infos[1].input_schema["required"][0], "message");
}

#[tokio::test]
async fn test_execute_reports_invalid_params() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let tool = registry.get("echo").await.unwrap();
    let err = tool.execute(serde_json::json!({})).await.unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn test_register_same_name_replaces() {
    let registry = Registry::new();
    registry.register(EchoTool).await;
    registry.register(EchoTool).await;

    assert_eq!(registry.to_tool_infos().await.len(), 1);
}

#[tokio::test]
async fn test_registered_tool_executes() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let tool = registry.get("echo").await.unwrap();
    let result = tool
        .execute(serde_json::json!({"message": "hi"}))
        .await
        .unwrap();
    assert_eq!(result.content, "hi");
}
