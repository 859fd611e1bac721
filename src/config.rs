// ABOUTME: Server configuration - fetch timeout, HTTP user agent, and the
// ABOUTME: identity reported to MCP clients during the handshake.

use std::time::Duration;

/// Default timeout applied to every feed request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Name reported in `serverInfo` during `initialize`.
pub const DEFAULT_SERVER_NAME: &str = "news-server";

/// Runtime configuration for the news server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upper bound on a single feed request, connect through body.
    pub fetch_timeout: Duration,

    /// User-Agent header sent with feed requests.
    pub user_agent: String,

    /// Server name reported to clients.
    pub server_name: String,

    /// Server version reported to clients.
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("news-mcp/{}", env!("CARGO_PKG_VERSION")),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the User-Agent header for feed requests.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
