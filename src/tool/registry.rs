// ABOUTME: Implements the Registry - a thread-safe container of the tools
// ABOUTME: the server advertises and dispatches to.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::Tool;
use crate::mcp::McpToolInfo;

/// Tools keyed by name. Shared with in-flight calls through `Arc<dyn Tool>`.
#[derive(Default)]
pub struct Registry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name, replacing any tool of that name.
    pub async fn register<T: Tool + 'static>(&self, tool: T) {
        let mut tools = self.tools.write().await;
        tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// Describe every tool for `tools/list`, sorted by name.
    pub async fn to_tool_infos(&self) -> Vec<McpToolInfo> {
        let tools = self.tools.read().await;
        let mut infos: Vec<McpToolInfo> = tools
            .values()
            .map(|t| McpToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.schema(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}
