// ABOUTME: Defines all error types for news-mcp using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under NewsError.

/// Top-level error type for the news-mcp library.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("MCP error: {0}")]
    Mcp(#[from] McpError),
}

/// Errors from fetching a single feed over HTTP.
///
/// Only the transport layer produces these. A document that fails to parse
/// is not an error; it yields zero entries.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Failed to fetch: {0}")]
    Fetch(#[from] FetchError),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// Whether the caller supplied something the server cannot act on,
    /// as opposed to a failure while carrying out a valid request.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ToolError::NotFound(_) | ToolError::InvalidParams(_) | ToolError::UnknownSource(_)
        )
    }
}

/// Errors from the MCP transport and protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
