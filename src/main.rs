// ABOUTME: Entry point for the news-mcp binary.
// ABOUTME: Parses flags, sets up logging on stderr, and serves MCP over stdio.

use std::io;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use news_mcp::ServerConfig;

/// MCP server exposing news headlines from RSS feeds over stdio.
#[derive(Debug, Parser)]
#[command(name = "news-mcp", version, about)]
struct Cli {
    /// Timeout for each feed request, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// User-Agent header sent with feed requests.
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_config(&self) -> ServerConfig {
        let config = ServerConfig::new().with_fetch_timeout(Duration::from_secs(self.timeout_secs));
        match &self.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent),
            None => config,
        }
    }
}

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.to_config();
    tracing::info!(
        timeout_secs = cli.timeout_secs,
        user_agent = %config.user_agent,
        "starting news-mcp"
    );

    news_mcp::serve_stdio(&config).await?;
    Ok(())
}
