//! Tool abstraction and registry.
//!
//! Every tool gitgud registers with the LLM is a proxy for an operation on
//! one of the MCP servers; there are no built-in tools. The [`Tool`] trait
//! keeps the registry decoupled from rig-core — [`rig_adapter`] bridges the
//! two at registration time.

pub mod mcp_tool;
pub mod rig_adapter;

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

use crate::mcp::ToolProvider;
use mcp_tool::McpTool;

/// The result of executing a tool.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: String) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(content: String) -> Self {
        Self {
            content,
            is_error: true,
        }
    }
}

/// Every tool implements this trait.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the LLM uses to call this tool.
    fn name(&self) -> &str;

    /// Human-readable description sent with the tool manifest.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn schema(&self) -> Value;

    /// Execute the tool with the given JSON input.
    async fn execute(&self, input: Value) -> Result<ToolResult>;
}

/// Holds all registered tools and hands them to rig-core per request.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Called during startup.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(Arc::from(tool));
    }

    /// Builds a registry holding a proxy for every tool the given MCP
    /// servers advertise. Tool names are registered as-is; the git and
    /// GitHub servers expose disjoint name sets.
    pub async fn from_providers(providers: &[Arc<ToolProvider>]) -> Result<Self> {
        let mut registry = Self::new();
        for provider in providers {
            for info in provider.list_tools().await? {
                registry.register(Box::new(McpTool::new(Arc::clone(provider), info)));
            }
        }
        Ok(registry)
    }

    /// How many tools are registered.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Converts all registered tools into rig-core [`ToolDyn`] trait objects.
    ///
    /// Returns a fresh `Vec` each call so the result can be moved into an
    /// agent builder's `.tools()` without borrow/move conflicts.
    pub fn to_rig_tools(&self) -> Vec<Box<dyn rig::tool::ToolDyn>> {
        self.tools
            .iter()
            .map(|t| {
                Box::new(rig_adapter::RigToolAdapter::new(Arc::clone(t)))
                    as Box<dyn rig::tool::ToolDyn>
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
