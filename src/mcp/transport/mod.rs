// ABOUTME: Transport abstraction for the MCP server side.
// ABOUTME: Newline-delimited JSON-RPC over any async byte stream, stdio included.

mod stdio;

pub use stdio::{LineTransport, StdioTransport};

use async_trait::async_trait;

use super::McpResponse;
use crate::error::McpError;

/// Trait for server-side MCP transports.
#[async_trait]
pub trait Transport: Send {
    /// Receive the next raw message. `None` means the client hung up.
    async fn receive(&mut self) -> Result<Option<String>, McpError>;

    /// Send a response to the client.
    async fn send(&mut self, response: &McpResponse) -> Result<(), McpError>;
}
