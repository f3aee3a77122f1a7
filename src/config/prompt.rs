//! Interactive settings prompts.
//!
//! Two entry points: [`ensure_complete`] fills in only the missing
//! required fields at startup, [`configure_all`] re-prompts every field
//! for the `gitgud config` subcommand. Both rewrite the settings file.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password, Select};

use super::types::Settings;
use crate::constants;

/// Prompts for any required field that is still blank, then saves.
///
/// No-op when the settings are already complete.
pub fn ensure_complete(settings: &mut Settings) -> Result<()> {
    if settings.is_complete() {
        return Ok(());
    }

    println!(
        "{}",
        "Some settings are missing. Let's fill them in.".yellow()
    );

    if settings.openai.api_key.trim().is_empty() {
        settings.openai.api_key = prompt_secret("OpenAI API key")?;
    }
    if settings.openai.chat_model_id.trim().is_empty() {
        settings.openai.chat_model_id =
            prompt_text("Chat model id", constants::DEFAULT_CHAT_MODEL)?;
    }
    if settings.openai.reasoning_effort.trim().is_empty() {
        settings.openai.reasoning_effort = prompt_effort(constants::DEFAULT_REASONING_EFFORT)?;
    }
    if settings.github.pat.trim().is_empty() {
        settings.github.pat = prompt_secret("GitHub personal access token")?;
    }

    settings.save()?;
    println!("{}", "Settings saved.".green());
    println!();
    Ok(())
}

/// Re-prompts every field, pre-filled with the current values, and saves.
pub fn configure_all(settings: &mut Settings) -> Result<()> {
    settings.openai.api_key =
        prompt_secret_keep_current("OpenAI API key", &settings.openai.api_key)?;
    settings.openai.chat_model_id =
        prompt_text("Chat model id", &settings.openai.chat_model_id)?;
    settings.openai.reasoning_effort = prompt_effort(&settings.openai.reasoning_effort)?;
    settings.github.pat =
        prompt_secret_keep_current("GitHub personal access token", &settings.github.pat)?;
    settings.github.default_org = Input::new()
        .with_prompt("Default GitHub organization (optional)")
        .with_initial_text(settings.github.default_org.clone())
        .allow_empty(true)
        .interact_text()?;

    settings.save()?;
    let path = Settings::config_path()?;
    println!("{} {}", "Settings saved to".green(), path.display());
    Ok(())
}

fn prompt_text(label: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

fn prompt_secret(label: &str) -> Result<String> {
    let value = Password::new().with_prompt(label).interact()?;
    Ok(value)
}

/// Like [`prompt_secret`] but an empty entry keeps the current value, so
/// re-running `gitgud config` doesn't force re-typing tokens.
fn prompt_secret_keep_current(label: &str, current: &str) -> Result<String> {
    let label = if current.trim().is_empty() {
        label.to_string()
    } else {
        format!("{} (empty keeps current)", label)
    };
    let value = Password::new()
        .with_prompt(label)
        .allow_empty_password(true)
        .interact()?;
    if value.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(value)
    }
}

fn prompt_effort(current: &str) -> Result<String> {
    let levels = constants::REASONING_EFFORT_LEVELS;
    let default = levels.iter().position(|l| *l == current).unwrap_or(levels.len() - 1);
    let index = Select::new()
        .with_prompt("Reasoning effort")
        .items(levels)
        .default(default)
        .interact()?;
    Ok(levels[index].to_string())
}
