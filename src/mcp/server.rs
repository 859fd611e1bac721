// ABOUTME: MCP server - answers the handshake, lists registered tools, and
// ABOUTME: dispatches tool calls, one request at a time, over a Transport.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::transport::Transport;
use super::{
    McpImplementation, McpInitializeParams, McpInitializeResult, McpRequest, McpResponse,
    McpRpcError, McpServerCapabilities, McpToolCallParams, McpToolResult, McpToolsCapability,
    McpToolsListResult, RequestId, negotiate_protocol_version,
};
use crate::config::ServerConfig;
use crate::error::{McpError, ToolError};
use crate::tool::Registry;

/// Serves the tools of a [`Registry`] to one MCP client.
pub struct McpServer {
    info: McpImplementation,
    registry: Registry,
}

impl McpServer {
    pub fn new(info: McpImplementation, registry: Registry) -> Self {
        Self { info, registry }
    }

    /// Create a server identified by the name and version in `config`.
    pub fn from_config(config: &ServerConfig, registry: Registry) -> Self {
        Self::new(
            McpImplementation {
                name: config.server_name.clone(),
                version: config.server_version.clone(),
            },
            registry,
        )
    }

    /// Process messages until the client closes the transport.
    ///
    /// A failing request produces an error response; only transport I/O
    /// errors end the session early.
    pub async fn serve<T: Transport>(&self, transport: &mut T) -> Result<(), McpError> {
        info!(server = %self.info.name, version = %self.info.version, "MCP server ready");
        while let Some(line) = transport.receive().await? {
            if let Some(response) = self.handle_message(&line).await {
                transport.send(&response).await?;
            }
        }
        info!("client closed the connection");
        Ok(())
    }

    /// Handle one raw message. Returns the response to send, if any.
    pub async fn handle_message(&self, raw: &str) -> Option<McpResponse> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable message");
                return Some(McpResponse::failure(None, McpRpcError::parse_error(e.to_string())));
            }
        };

        match serde_json::from_value::<McpRequest>(value.clone()) {
            Ok(request) => self.handle(request).await,
            // Responses to server-initiated requests; this server sends none.
            Err(_) if value.get("result").is_some() || value.get("error").is_some() => None,
            Err(e) => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
                Some(McpResponse::failure(
                    id,
                    McpRpcError::invalid_request(e.to_string()),
                ))
            }
        }
    }

    /// Handle a decoded request or notification.
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        debug!(method = %request.method, id = ?request.id, "received message");

        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools().await,
            "tools/call" => self.call_tool(request.params).await,
            other => Err(McpRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => McpResponse::success(id, result),
            Err(error) => McpResponse::failure(Some(id), error),
        })
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => debug!("client finished initialization"),
            // Calls run to completion; there is nothing to cancel.
            "notifications/cancelled" => debug!("ignoring cancellation"),
            other => debug!(method = other, "ignoring notification"),
        }
    }

    fn initialize(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, McpRpcError> {
        let params: McpInitializeParams =
            serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
                .map_err(|e| McpRpcError::invalid_params(e.to_string()))?;

        let protocol_version = negotiate_protocol_version(&params.protocol_version);
        match &params.client_info {
            Some(client) => info!(
                client = %client.name,
                client_version = %client.version,
                protocol = protocol_version,
                "client connected"
            ),
            None => info!(protocol = protocol_version, "client connected"),
        }

        to_value(&McpInitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: McpServerCapabilities {
                tools: Some(McpToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        })
    }

    async fn list_tools(&self) -> Result<serde_json::Value, McpRpcError> {
        let tools = self.registry.to_tool_infos().await;
        to_value(&McpToolsListResult { tools })
    }

    async fn call_tool(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, McpRpcError> {
        let params: McpToolCallParams =
            serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
                .map_err(|e| McpRpcError::invalid_params(e.to_string()))?;

        let outcome = match self.registry.get(&params.name).await {
            Some(tool) => {
                let arguments = params.arguments.unwrap_or_else(|| serde_json::json!({}));
                tool.execute(arguments).await
            }
            None => Err(ToolError::NotFound(params.name.clone())),
        };

        match outcome {
            Ok(result) => {
                debug!(tool = %params.name, metadata = ?result.metadata, "tool call finished");
                to_value(&McpToolResult::from(result))
            }
            Err(err) => {
                error!(tool = %params.name, error = %err, "tool call failed");
                Err(McpRpcError::from(&err))
            }
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, McpRpcError> {
    serde_json::to_value(value).map_err(|e| McpRpcError::internal_error(e.to_string()))
}
