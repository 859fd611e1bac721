// ABOUTME: Tests for MCP types - serialization, deserialization.
// ABOUTME: Verifies JSON format matches MCP protocol.

use super::*;
use crate::error::{FetchError, ToolError};
use crate::tool::ToolResult;

#[test]
fn test_request_deserialization_numeric_id() {
    let json = r#"{"jsonrpc": "2.0", "id": 7, "method": "tools/list"}"#;
    let req: McpRequest = serde_json::from_str(json).unwrap();

    assert_eq!(req.id, Some(RequestId::Number(7.into())));
    assert_eq!(req.method, "tools/list");
    assert!(req.params.is_none());
}

#[test]
fn test_request_deserialization_string_id() {
    let json = r#"{"jsonrpc": "2.0", "id": "abc", "method": "ping"}"#;
    let req: McpRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.id, Some(RequestId::String("abc".into())));
}

#[test]
fn test_notification_has_no_id() {
    let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;
    let req: McpRequest = serde_json::from_str(json).unwrap();
    assert!(req.id.is_none());
    assert!(req.params.is_none());
}

#[test]
fn test_request_id_outside_i64_round_trips() {
    for raw in ["18446744073709551615", "1.5", "-3"] {
        let json = format!(r#"{{"jsonrpc": "2.0", "id": {raw}, "method": "ping"}}"#);
        let req: McpRequest = serde_json::from_str(&json).unwrap();
        let id = req.id.unwrap();
        assert!(matches!(id, RequestId::Number(_)), "id {raw}");

        let resp = McpResponse::success(id, serde_json::json!({}));
        let out = serde_json::to_string(&resp).unwrap();
        assert!(out.contains(&format!(r#""id":{raw}"#)), "{out}");
    }
}

#[test]
fn test_success_response_serialization() {
    let resp = McpResponse::success(RequestId::Number(1.into()), serde_json::json!({"tools": []}));
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 1);
    assert_eq!(json["result"]["tools"], serde_json::json!([]));
    assert!(json.get("error").is_none());
}

#[test]
fn test_error_response_keeps_null_id() {
    let resp = McpResponse::failure(None, McpRpcError::parse_error("bad json"));
    let json = serde_json::to_value(&resp).unwrap();

    assert!(json["id"].is_null());
    assert_eq!(json["error"]["code"], -32700);
    assert_eq!(json["error"]["message"], "bad json");
    assert!(json.get("result").is_none());
}

#[test]
fn test_tool_error_mapping() {
    let invalid = McpRpcError::from(&ToolError::UnknownSource("cnn".into()));
    assert_eq!(invalid.code, McpRpcError::INVALID_PARAMS);
    assert_eq!(invalid.message, "Unknown source: cnn");

    let internal = McpRpcError::from(&ToolError::Fetch(FetchError::Client("down".into())));
    assert_eq!(internal.code, McpRpcError::INTERNAL_ERROR);
}

#[test]
fn test_tool_info_serialization() {
    let info = McpToolInfo {
        name: "get_headlines".into(),
        description: "Get latest news headlines by category".into(),
        input_schema: serde_json::json!({"type": "object"}),
    };
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["inputSchema"]["type"], "object");
    assert!(json.get("input_schema").is_none());
}

#[test]
fn test_tool_result_from_tool_result() {
    let result: McpToolResult = ToolResult::text("{}").into();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "content": [{"type": "text", "text": "{}"}],
            "isError": false
        })
    );
}

#[test]
fn test_initialize_params_without_client_info() {
    let json = r#"{"protocolVersion": "2024-11-05", "capabilities": {}}"#;
    let params: McpInitializeParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.protocol_version, "2024-11-05");
    assert!(params.client_info.is_none());
}

#[test]
fn test_negotiate_protocol_version() {
    assert_eq!(negotiate_protocol_version("2024-11-05"), "2024-11-05");
    assert_eq!(negotiate_protocol_version("2025-03-26"), "2025-03-26");
    assert_eq!(negotiate_protocol_version("1999-01-01"), LATEST_PROTOCOL_VERSION);
}
