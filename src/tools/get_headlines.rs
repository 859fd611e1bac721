// ABOUTME: GetHeadlinesTool - latest headlines for every source in a category.
// ABOUTME: Fetches sources one at a time; failed sources become inline error records.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::{decode_params, default_limit, human_list, limit_schema};
use crate::directory::FeedDirectory;
use crate::error::ToolError;
use crate::feed::{HeadlineFetcher, HeadlinesResult, aggregate};
use crate::tool::{Tool, ToolResult};

#[derive(Deserialize)]
struct Params {
    category: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Tool returning headlines across all sources of one category.
pub struct GetHeadlinesTool {
    directory: Arc<FeedDirectory>,
    fetcher: Arc<dyn HeadlineFetcher>,
}

impl GetHeadlinesTool {
    pub fn new(directory: Arc<FeedDirectory>, fetcher: Arc<dyn HeadlineFetcher>) -> Self {
        Self { directory, fetcher }
    }
}

#[async_trait]
impl Tool for GetHeadlinesTool {
    fn name(&self) -> &str {
        "get_headlines"
    }

    fn description(&self) -> &str {
        "Get latest news headlines by category"
    }

    fn schema(&self) -> serde_json::Value {
        let categories = self.directory.categories();
        serde_json::json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": format!("News category: {}", human_list(&categories)),
                    "enum": categories
                },
                "limit": limit_schema()
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: Params = decode_params(params)?;

        let sources = self.directory.lookup_category(&params.category);
        let mut outcomes = Vec::with_capacity(sources.len());
        for source in sources {
            let outcome = self.fetcher.fetch(&source.url, params.limit).await;
            if let Err(err) = &outcome {
                warn!(source = %source.name, url = %source.url, error = %err, "source fetch failed");
            }
            outcomes.push((source.name.clone(), outcome));
        }

        let headlines = aggregate(outcomes, params.limit);
        let failed_sources: Vec<String> = headlines
            .iter()
            .filter(|item| item.is_failure())
            .map(|item| item.source().to_string())
            .collect();
        let count = headlines.len() - failed_sources.len();

        let result = HeadlinesResult::for_category(params.category, headlines);
        Ok(ToolResult::text(result.to_json()?)
            .with_metadata("headline_count", count)
            .with_metadata("failed_sources", failed_sources))
    }
}
