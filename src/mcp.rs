//! MCP tool provider connections.
//!
//! gitgud talks to two MCP servers: `mcp-server-git` for local repository
//! operations and the GitHub server for the hosted API. Both run as child
//! processes over stdio; the rmcp client owns the transport and the
//! protocol handshake. Calls are single-attempt with no retry.

use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, transport::TokioChildProcess, ServiceExt};
use serde_json::Value;
use std::time::Duration;
use tokio::process::Command;

use crate::config::Settings;
use crate::constants;
use crate::content::ContentBlock;

type RunningMcpService = rmcp::service::RunningService<rmcp::service::RoleClient, ()>;

/// How to launch one MCP server.
pub struct ServerSpec {
    /// Short label shown in listings and errors ("git", "github").
    pub label: &'static str,
    pub command: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Spec for the local git MCP server.
pub fn git_server() -> ServerSpec {
    ServerSpec {
        label: "git",
        command: constants::GIT_SERVER_COMMAND.to_string(),
        args: constants::GIT_SERVER_ARGS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        env: Vec::new(),
    }
}

/// Spec for the GitHub MCP server, which reads its token from the
/// environment of the spawned process.
pub fn github_server(settings: &Settings) -> ServerSpec {
    ServerSpec {
        label: "github",
        command: constants::GITHUB_SERVER_COMMAND.to_string(),
        args: constants::GITHUB_SERVER_ARGS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        env: vec![(
            constants::GITHUB_TOKEN_ENV.to_string(),
            settings.github.pat.clone(),
        )],
    }
}

/// The result of one tool call: content blocks and the server's error flag.
pub struct ToolCallOutput {
    pub blocks: Vec<ContentBlock>,
    pub is_error: bool,
}

/// One tool advertised by an MCP server.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's parameters.
    pub schema: Value,
}

/// A connected MCP server exposing a set of named tools.
pub struct ToolProvider {
    label: &'static str,
    service: RunningMcpService,
}

impl ToolProvider {
    /// Spawns the server process and completes the MCP handshake.
    ///
    /// The handshake is bounded by a timeout; it never completes when the
    /// server binary is missing from `PATH`.
    pub async fn spawn(spec: ServerSpec) -> Result<Self> {
        let mut command = Command::new(&spec.command);
        command.args(&spec.args);
        for (key, value) in &spec.env {
            command.env(key, value);
        }

        let child = TokioChildProcess::new(command).with_context(|| {
            format!(
                "Failed to start the {} MCP server ({})",
                spec.label, spec.command
            )
        })?;

        let service = tokio::time::timeout(
            Duration::from_secs(constants::MCP_CONNECT_TIMEOUT_SECS),
            ().serve(child),
        )
        .await
        .map_err(|_| {
            anyhow::anyhow!(
                "Timed out connecting to the {} MCP server. Is `{}` installed?",
                spec.label,
                spec.command
            )
        })?
        .with_context(|| format!("MCP handshake with the {} server failed", spec.label))?;

        Ok(Self {
            label: spec.label,
            service,
        })
    }

    /// Short label identifying the server ("git" or "github").
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Fetches the server's tool manifest.
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
        let result = self
            .service
            .list_tools(Default::default())
            .await
            .with_context(|| format!("Failed to list tools on the {} server", self.label))?;

        Ok(result
            .tools
            .into_iter()
            .map(|tool| ToolInfo {
                name: tool.name.to_string(),
                description: tool.description.unwrap_or_default().to_string(),
                schema: serde_json::to_value(&*tool.input_schema).unwrap_or(Value::Null),
            })
            .collect())
    }

    /// Calls a tool and returns its content blocks plus the server's
    /// error flag. Single attempt.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolCallOutput> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                meta: None,
                name: name.to_string().into(),
                arguments: arguments.as_object().cloned(),
                task: None,
            })
            .await
            .with_context(|| format!("Tool call '{}' on the {} server failed", name, self.label))?;

        // The block union is decoded from the serialized result so unknown
        // kinds land in ContentBlock::Other instead of failing the call.
        let value = serde_json::to_value(&result)?;
        let blocks = match value.get("content") {
            Some(content) => serde_json::from_value(content.clone())
                .with_context(|| format!("Malformed content from tool '{}'", name))?,
            None => Vec::new(),
        };
        let is_error = value
            .get("isError")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Ok(ToolCallOutput { blocks, is_error })
    }

    /// Signals the rmcp service to stop, terminating the child process.
    pub fn shutdown(&self) {
        self.service.cancellation_token().cancel();
    }
}
