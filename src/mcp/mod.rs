// ABOUTME: MCP module - Model Context Protocol server implementation.
// ABOUTME: Exposes registered tools to clients over a line-delimited JSON-RPC transport.

mod server;
mod transport;
mod types;

pub use server::McpServer;
pub use transport::{LineTransport, StdioTransport, Transport};
pub use types::*;

#[cfg(test)]
mod types_test;
