// ABOUTME: Root module for news-mcp - an MCP server serving news headlines
// ABOUTME: from a static directory of RSS feeds. Re-exports the public types.

pub mod config;
pub mod directory;
pub mod error;
pub mod feed;
pub mod mcp;
pub mod prelude;
pub mod tool;
pub mod tools;

use std::sync::Arc;

pub use config::ServerConfig;
pub use directory::{FeedDirectory, FeedSource};
pub use error::NewsError;
pub use mcp::McpServer;

/// Build a registry holding both news tools over the built-in directory,
/// fetching feeds over HTTP.
pub async fn build_registry(config: &ServerConfig) -> Result<tool::Registry, NewsError> {
    let fetcher = Arc::new(feed::HttpHeadlineFetcher::new(config)?);
    let registry = tool::Registry::new();
    tools::register_news_tools(&registry, Arc::new(FeedDirectory::builtin()), fetcher).await;
    Ok(registry)
}

/// Serve the news tools on stdin/stdout until the client disconnects.
pub async fn serve_stdio(config: &ServerConfig) -> Result<(), NewsError> {
    let registry = build_registry(config).await?;
    let server = McpServer::from_config(config, registry);
    let mut transport = mcp::StdioTransport::stdio();
    server.serve(&mut transport).await?;
    Ok(())
}
