// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use news_mcp::prelude::*;` to get started quickly.

pub use crate::config::ServerConfig;
pub use crate::directory::{FeedDirectory, FeedSource};
pub use crate::error::{FetchError, McpError, NewsError, ToolError};
pub use crate::feed::{
    CategoryItem, FetchFailure, Headline, HeadlineFetcher, HeadlinesResult, HttpHeadlineFetcher,
    SourcedHeadline,
};
pub use crate::mcp::{
    LineTransport, McpRequest, McpResponse, McpRpcError, McpServer, McpToolInfo, McpToolResult,
    StdioTransport, Transport,
};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{GetHeadlinesTool, GetNewsFromSourceTool, register_news_tools};
