//! File loading and saving for gitgud settings.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Settings;

impl Settings {
    /// Reads settings from `path`.
    ///
    /// A missing file, unreadable file, or parse failure all yield
    /// defaults. The startup completeness prompt repairs whatever was
    /// lost; nothing is reported here.
    pub(super) fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    /// Writes settings to `path` as pretty JSON, creating parent
    /// directories as needed. Field order follows struct declaration
    /// order, so repeated saves of equal settings are byte-identical.
    pub(super) fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{GithubSettings, OpenAiSettings};
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json at all").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let settings = Settings {
            openai: OpenAiSettings {
                api_key: "sk-abc".into(),
                chat_model_id: "gpt-4o".into(),
                reasoning_effort: "medium".into(),
            },
            github: GithubSettings {
                pat: "ghp_xyz".into(),
                default_org: "acme".into(),
            },
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn unknown_keys_are_dropped_silently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"openai": {"api_key": "sk", "legacy_field": 1}, "extra": true}"#,
        )
        .unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.openai.api_key, "sk");
        assert_eq!(settings.openai.chat_model_id, "gpt-4o");
    }
}
