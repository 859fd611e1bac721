// ABOUTME: GetNewsFromSourceTool - latest headlines from one named source.
// ABOUTME: Unknown sources and fetch failures fail the whole invocation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{decode_params, default_limit, human_list, limit_schema};
use crate::directory::FeedDirectory;
use crate::error::ToolError;
use crate::feed::{HeadlineFetcher, HeadlinesResult};
use crate::tool::{Tool, ToolResult};

#[derive(Deserialize)]
struct Params {
    source: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Tool returning headlines from a single source.
pub struct GetNewsFromSourceTool {
    directory: Arc<FeedDirectory>,
    fetcher: Arc<dyn HeadlineFetcher>,
}

impl GetNewsFromSourceTool {
    pub fn new(directory: Arc<FeedDirectory>, fetcher: Arc<dyn HeadlineFetcher>) -> Self {
        Self { directory, fetcher }
    }
}

#[async_trait]
impl Tool for GetNewsFromSourceTool {
    fn name(&self) -> &str {
        "get_news_from_source"
    }

    fn description(&self) -> &str {
        "Get news from a specific source"
    }

    fn schema(&self) -> serde_json::Value {
        let sources = self.directory.source_names();
        serde_json::json!({
            "type": "object",
            "properties": {
                "source": {
                    "type": "string",
                    "description": format!("News source: {}", human_list(&sources)),
                    "enum": sources
                },
                "limit": limit_schema()
            },
            "required": ["source"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: Params = decode_params(params)?;

        let source = self
            .directory
            .lookup_source(&params.source)
            .ok_or_else(|| ToolError::UnknownSource(params.source.clone()))?;

        // Unlike the category path, a failed fetch here fails the call.
        let headlines = self.fetcher.fetch(&source.url, params.limit).await?;
        let count = headlines.len();

        let result = HeadlinesResult::for_source(params.source, headlines);
        Ok(ToolResult::text(result.to_json()?).with_metadata("headline_count", count))
    }
}
