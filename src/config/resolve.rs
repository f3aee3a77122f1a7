//! Environment variable overrides for gitgud settings.
//!
//! Values from the environment win over the file, using the
//! double-underscore path convention (`OPENAI__API_KEY` overrides
//! `openai.api_key`). Applied once after load; `.env` files are read by
//! dotenvy before this runs, so they flow through the same path.

use super::types::Settings;
use crate::constants;

impl Settings {
    pub(super) fn apply_env_overrides(&mut self) {
        override_from_env(&mut self.openai.api_key, constants::ENV_OPENAI_API_KEY);
        override_from_env(
            &mut self.openai.chat_model_id,
            constants::ENV_OPENAI_CHAT_MODEL_ID,
        );
        override_from_env(
            &mut self.openai.reasoning_effort,
            constants::ENV_OPENAI_REASONING_EFFORT,
        );
        override_from_env(&mut self.github.pat, constants::ENV_GITHUB_PAT);
        override_from_env(&mut self.github.default_org, constants::ENV_GITHUB_DEFAULT_ORG);
    }
}

/// Replaces `target` with the value of `var` when set and non-empty.
fn override_from_env(target: &mut String, var: &str) {
    if let Ok(value) = std::env::var(var) {
        if !value.trim().is_empty() {
            *target = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_overrides_file_value() {
        let mut settings = Settings::default();
        settings.openai.api_key = "from-file".into();
        std::env::set_var(constants::ENV_OPENAI_API_KEY, "from-env");
        settings.apply_env_overrides();
        std::env::remove_var(constants::ENV_OPENAI_API_KEY);
        assert_eq!(settings.openai.api_key, "from-env");
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let mut target = "keep".to_string();
        std::env::set_var("GITGUD_TEST_EMPTY_OVERRIDE", "  ");
        override_from_env(&mut target, "GITGUD_TEST_EMPTY_OVERRIDE");
        std::env::remove_var("GITGUD_TEST_EMPTY_OVERRIDE");
        assert_eq!(target, "keep");
    }
}
