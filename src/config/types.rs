//! Struct definitions and serde defaults for gitgud settings.

use serde::{Deserialize, Serialize};

/// Root settings for gitgud, serialized as `config.json`.
///
/// Fields use serde defaults so gitgud can run with an absent or partial
/// file. Unknown keys from older file shapes are dropped on round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// OpenAI credentials and model selection.
    #[serde(default)]
    pub openai: OpenAiSettings,
    /// GitHub access token and default organization.
    #[serde(default)]
    pub github: GithubSettings,
}

/// OpenAI section of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenAiSettings {
    /// API key for authentication.
    #[serde(default)]
    pub api_key: String,
    /// Chat model identifier (e.g. `"gpt-4o"`).
    #[serde(default = "default_chat_model")]
    pub chat_model_id: String,
    /// Reasoning effort hint sent with completion requests.
    #[serde(default = "default_reasoning_effort")]
    pub reasoning_effort: String,
}

/// GitHub section of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GithubSettings {
    /// Personal access token, also handed to the GitHub MCP server.
    #[serde(default)]
    pub pat: String,
    /// Organization used by `gitgud commit` when none is given.
    #[serde(default)]
    pub default_org: String,
}

/// Returns the default chat model identifier (`"gpt-4o"`).
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_chat_model() -> String {
    crate::constants::DEFAULT_CHAT_MODEL.to_string()
}

/// Returns the default reasoning effort (`"high"`).
pub(super) fn default_reasoning_effort() -> String {
    crate::constants::DEFAULT_REASONING_EFFORT.to_string()
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_model_id: default_chat_model(),
            reasoning_effort: default_reasoning_effort(),
        }
    }
}

impl Settings {
    /// True iff all four required fields are non-blank: the OpenAI API key,
    /// the GitHub PAT, the chat model id, and the reasoning effort.
    /// Whitespace-only values count as blank. `default_org` is optional.
    pub fn is_complete(&self) -> bool {
        !self.openai.api_key.trim().is_empty()
            && !self.github.pat.trim().is_empty()
            && !self.openai.chat_model_id.trim().is_empty()
            && !self.openai.reasoning_effort.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Settings {
        Settings {
            openai: OpenAiSettings {
                api_key: "sk-test".into(),
                chat_model_id: "gpt-4o".into(),
                reasoning_effort: "high".into(),
            },
            github: GithubSettings {
                pat: "ghp_test".into(),
                default_org: String::new(),
            },
        }
    }

    #[test]
    fn defaults_are_incomplete() {
        let settings = Settings::default();
        assert_eq!(settings.openai.chat_model_id, "gpt-4o");
        assert_eq!(settings.openai.reasoning_effort, "high");
        assert!(!settings.is_complete());
    }

    #[test]
    fn complete_when_all_four_fields_set() {
        assert!(complete().is_complete());
    }

    #[test]
    fn default_org_not_required_for_completeness() {
        let settings = complete();
        assert!(settings.github.default_org.is_empty());
        assert!(settings.is_complete());
    }

    #[test]
    fn blank_or_whitespace_field_is_incomplete() {
        let mut settings = complete();
        settings.openai.api_key = "   ".into();
        assert!(!settings.is_complete());

        let mut settings = complete();
        settings.github.pat = String::new();
        assert!(!settings.is_complete());

        let mut settings = complete();
        settings.openai.chat_model_id = "\t".into();
        assert!(!settings.is_complete());

        let mut settings = complete();
        settings.openai.reasoning_effort = String::new();
        assert!(!settings.is_complete());
    }
}
