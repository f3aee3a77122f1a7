//! Proxy tool backed by an MCP server operation.

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

use super::{Tool, ToolResult};
use crate::content::first_text;
use crate::mcp::{ToolInfo, ToolProvider};

/// A single MCP server tool exposed through the [`Tool`] trait.
///
/// Name, description, and schema come from the server's manifest;
/// execution forwards to `call_tool` on the owning provider. Only the
/// first text content block of the response is returned (the crate-wide
/// extraction policy); non-text blocks are dropped.
pub struct McpTool {
    provider: Arc<ToolProvider>,
    info: ToolInfo,
}

impl McpTool {
    pub fn new(provider: Arc<ToolProvider>, info: ToolInfo) -> Self {
        Self { provider, info }
    }
}

#[async_trait::async_trait]
impl Tool for McpTool {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn description(&self) -> &str {
        &self.info.description
    }

    fn schema(&self) -> Value {
        self.info.schema.clone()
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let output = self.provider.call_tool(&self.info.name, input).await?;
        let text = first_text(&output.blocks).unwrap_or_default().to_string();
        if output.is_error {
            Ok(ToolResult::error(text))
        } else {
            Ok(ToolResult::success(text))
        }
    }
}
