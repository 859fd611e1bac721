// ABOUTME: News tools - the two operations the server exposes over MCP.
// ABOUTME: Headlines by category and headlines from a single named source.

mod get_headlines;
mod get_news_from_source;

pub use get_headlines::GetHeadlinesTool;
pub use get_news_from_source::GetNewsFromSourceTool;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::directory::FeedDirectory;
use crate::error::ToolError;
use crate::feed::HeadlineFetcher;
use crate::tool::Registry;

/// Headlines returned when the caller gives no `limit`.
pub const DEFAULT_LIMIT: usize = 5;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Register both news tools against one directory and fetcher.
pub async fn register_news_tools(
    registry: &Registry,
    directory: Arc<FeedDirectory>,
    fetcher: Arc<dyn HeadlineFetcher>,
) {
    registry
        .register(GetHeadlinesTool::new(directory.clone(), fetcher.clone()))
        .await;
    registry
        .register(GetNewsFromSourceTool::new(directory, fetcher))
        .await;
}

/// Decode tool arguments, reporting any mismatch as invalid parameters.
fn decode_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    let params = if params.is_null() {
        serde_json::json!({})
    } else {
        params
    };
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

fn limit_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "description": format!("Number of headlines to return (default: {DEFAULT_LIMIT})"),
        "minimum": 0,
        "default": DEFAULT_LIMIT
    })
}

/// "a, b, or c"
fn human_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}
