//! Centralized constants for gitgud.
//!
//! All magic numbers, default strings, and external command lines live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "gitgud";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.json";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "chat_history.txt";

/// Default OpenAI chat model identifier.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";

/// Default reasoning effort sent alongside completion requests.
pub const DEFAULT_REASONING_EFFORT: &str = "high";

/// Reasoning effort levels offered by the config prompt.
pub const REASONING_EFFORT_LEVELS: &[&str] = &["low", "medium", "high"];

/// Maximum tokens for LLM completions.
pub const MAX_TOKENS: u64 = 4096;

/// Maximum number of tool-calling round-trips rig-core may perform per turn.
pub const MAX_TOOL_TURNS: usize = 10;

/// One-shot prompt prefix for the commit summary step. The staged diff is
/// appended after a newline.
pub const SUMMARY_PROMPT: &str =
    "Generate a brief, imperative commit message summarizing the diff:";

// --- MCP servers ---

/// Command that launches the local git MCP server.
pub const GIT_SERVER_COMMAND: &str = "uvx";

/// Arguments for the local git MCP server.
pub const GIT_SERVER_ARGS: &[&str] = &["mcp-server-git"];

/// Command that launches the GitHub MCP server.
pub const GITHUB_SERVER_COMMAND: &str = "npx";

/// Arguments for the GitHub MCP server.
pub const GITHUB_SERVER_ARGS: &[&str] = &["-y", "@modelcontextprotocol/server-github"];

/// Environment variable the GitHub MCP server reads its token from.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Seconds to wait for an MCP server handshake before giving up. The
/// handshake hangs indefinitely when the server binary is missing.
pub const MCP_CONNECT_TIMEOUT_SECS: u64 = 30;

// --- Environment overrides (double-underscore path convention) ---

/// Overrides `openai.api_key`.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI__API_KEY";

/// Overrides `openai.chat_model_id`.
pub const ENV_OPENAI_CHAT_MODEL_ID: &str = "OPENAI__CHAT_MODEL_ID";

/// Overrides `openai.reasoning_effort`.
pub const ENV_OPENAI_REASONING_EFFORT: &str = "OPENAI__REASONING_EFFORT";

/// Overrides `github.pat`.
pub const ENV_GITHUB_PAT: &str = "GITHUB__PAT";

/// Overrides `github.default_org`.
pub const ENV_GITHUB_DEFAULT_ORG: &str = "GITHUB__DEFAULT_ORG";
