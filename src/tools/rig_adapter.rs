//! Adapter bridging gitgud's [`Tool`] trait to rig-core's [`ToolDyn`] trait.
//!
//! Wraps an `Arc<dyn Tool>` so the MCP proxy tools can be registered with
//! rig-core's agent builder and dispatched during its tool-calling loop.

use std::pin::Pin;
use std::sync::Arc;

use rig::completion::ToolDefinition as RigToolDefinition;
use rig::tool::{ToolDyn, ToolError};

use super::Tool;

/// Bridges a gitgud [`Tool`] to rig-core's [`ToolDyn`] trait.
pub struct RigToolAdapter {
    tool: Arc<dyn Tool>,
}

impl RigToolAdapter {
    /// Creates a new adapter wrapping the given tool.
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self { tool }
    }
}

impl ToolDyn for RigToolAdapter {
    fn name(&self) -> String {
        self.tool.name().to_string()
    }

    fn definition<'a>(
        &'a self,
        _prompt: String,
    ) -> Pin<Box<dyn std::future::Future<Output = RigToolDefinition> + Send + 'a>> {
        let name = self.tool.name().to_string();
        let description = self.tool.description().to_string();
        let parameters = self.tool.schema();
        Box::pin(async move {
            RigToolDefinition {
                name,
                description,
                parameters,
            }
        })
    }

    fn call<'a>(
        &'a self,
        args: String,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, ToolError>> + Send + 'a>> {
        Box::pin(async move {
            let input: serde_json::Value =
                serde_json::from_str(&args).map_err(ToolError::JsonError)?;
            match self.tool.execute(input).await {
                Ok(result) if result.is_error => Ok(format!("Error: {}", result.content)),
                Ok(result) => Ok(result.content),
                Err(e) => {
                    // Return tool errors as result strings instead of ToolError.
                    // rig-core wraps ToolError through ToolSetError → ToolServerError,
                    // causing triple-nested "ToolCallError: ToolCallError: ToolCallError:"
                    // prefixes. Returning Ok("Error: ...") avoids this while still
                    // letting the LLM see and react to the error.
                    Ok(format!("Error: {}", e))
                }
            }
        })
    }
}
