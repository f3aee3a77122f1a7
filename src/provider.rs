//! LLM provider wrapper for gitgud.
//!
//! Wraps rig-core's OpenAI client. Agents are constructed per call since
//! they are cheap to create and each call registers a different tool set.
//! The multi-turn tool-calling loop (send → tool → feedback) is entirely
//! rig-core's; this module subscribes to the stream purely for rendering.

use anyhow::{Context, Result};
use futures::StreamExt;
use rig::agent::MultiTurnStreamItem;
use rig::client::CompletionClient;
use rig::message::{Message as RigMessage, Text, ToolResultContent};
use rig::providers::openai;
use rig::streaming::{StreamedAssistantContent, StreamedUserContent, StreamingChat, StreamingPrompt};
use serde_json::json;
use std::collections::HashMap;

use crate::config::Settings;
use crate::constants::MAX_TOKENS;
use crate::message::{Message, Role};
use crate::output::Renderer;
use crate::tools::ToolRegistry;

/// A configured OpenAI provider ready to handle completion requests.
pub struct Provider {
    client: openai::Client,
    model: String,
    reasoning_effort: String,
}

impl Provider {
    /// Creates a provider from the loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or client construction fails.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.openai.api_key.trim();
        if api_key.is_empty() {
            anyhow::bail!("No OpenAI API key configured. Run `gitgud config`.");
        }
        let client = openai::Client::new(api_key).context("Failed to create OpenAI client")?;
        Ok(Self {
            client,
            model: settings.openai.chat_model_id.clone(),
            reasoning_effort: settings.openai.reasoning_effort.clone(),
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Streams a one-shot prompt with no tool registrations.
    ///
    /// Used by the commit summary step. The accumulated text is returned;
    /// rendering is up to the caller's [`Renderer`].
    pub async fn stream_prompt(&self, prompt: &str, renderer: &mut dyn Renderer) -> Result<String> {
        let agent = self
            .client
            .agent(&self.model)
            .max_tokens(MAX_TOKENS)
            .additional_params(json!({ "reasoning_effort": self.reasoning_effort }))
            .build();

        let mut stream = agent.stream_prompt(prompt).await;
        let mut full_response = String::new();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(MultiTurnStreamItem::StreamAssistantItem(StreamedAssistantContent::Text(
                    Text { text },
                ))) => {
                    renderer.render_token(&text);
                    full_response.push_str(&text);
                }
                Ok(MultiTurnStreamItem::FinalResponse(_)) => {
                    // Stream complete
                }
                Err(err) => {
                    renderer.render_error(&err.to_string());
                    anyhow::bail!("Streaming error: {}", err);
                }
                _ => {}
            }
        }

        renderer.render_done();
        Ok(full_response)
    }

    /// Streams a multi-turn reply with tool execution driven by rig-core.
    ///
    /// The first system message in `history` becomes the agent preamble,
    /// the last message the prompt, everything in between the chat
    /// history. rig-core executes tool calls via the registered adapters
    /// and feeds results back to the LLM until it finalizes its answer.
    pub async fn stream_with_tools(
        &self,
        history: &[Message],
        tools: &ToolRegistry,
        renderer: &mut dyn Renderer,
        max_turns: usize,
    ) -> Result<String> {
        let system_prompt = history
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.text().to_string())
            .unwrap_or_default();

        let prompt_text = history
            .last()
            .map(|m| m.text().to_string())
            .unwrap_or_default();

        let chat_history: Vec<RigMessage> = history
            .iter()
            .take(history.len().saturating_sub(1))
            .filter(|m| m.role != Role::System)
            .map(|m| match m.role {
                Role::Assistant => RigMessage::assistant(m.text()),
                _ => RigMessage::user(m.text()),
            })
            .collect();

        let agent = self
            .client
            .agent(&self.model)
            .preamble(&system_prompt)
            .max_tokens(MAX_TOKENS)
            .additional_params(json!({ "reasoning_effort": self.reasoning_effort }))
            .tools(tools.to_rig_tools())
            .build();

        let mut stream = agent
            .stream_chat(prompt_text, chat_history)
            .multi_turn(max_turns)
            .await;

        let mut full_response = String::new();
        let mut tool_names: HashMap<String, String> = HashMap::new();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(MultiTurnStreamItem::StreamAssistantItem(StreamedAssistantContent::Text(
                    Text { text },
                ))) => {
                    renderer.render_token(&text);
                    full_response.push_str(&text);
                }
                Ok(MultiTurnStreamItem::StreamAssistantItem(
                    StreamedAssistantContent::ToolCall {
                        tool_call,
                        internal_call_id,
                    },
                )) => {
                    let name = tool_call.function.name.clone();
                    renderer.tool_start(&name, &tool_call.function.arguments);
                    tool_names.insert(internal_call_id, name);
                }
                Ok(MultiTurnStreamItem::StreamUserItem(StreamedUserContent::ToolResult {
                    tool_result,
                    internal_call_id,
                })) => {
                    let name = tool_names
                        .get(&internal_call_id)
                        .map(|s| s.as_str())
                        .unwrap_or("unknown");
                    let result_text: String = tool_result
                        .content
                        .into_iter()
                        .filter_map(|c| match c {
                            ToolResultContent::Text(t) => Some(t.text),
                            _ => None,
                        })
                        .collect::<Vec<_>>()
                        .join("\n");
                    renderer.tool_result(name, &result_text);
                }
                Ok(MultiTurnStreamItem::FinalResponse(_)) => {
                    // Stream complete
                }
                Err(err) => {
                    renderer.render_error(&err.to_string());
                    anyhow::bail!("Streaming error: {}", err);
                }
                _ => {
                    // ToolCallDelta, Reasoning, etc. — rig-core handles internally
                }
            }
        }

        renderer.render_done();
        Ok(full_response)
    }
}
