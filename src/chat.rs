//! Interactive chat REPL for gitgud.
//!
//! A multi-turn conversation loop using [`rustyline`] for readline support.
//! The full transcript is sent with each request so the LLM keeps context
//! across turns; tool calls happen inside rig-core's loop and only the
//! finalized assistant text lands in the transcript. The transcript lives
//! for the session only and is discarded on exit.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

use crate::config::Settings;
use crate::constants;
use crate::message::Message;
use crate::output::StdoutRenderer;
use crate::provider::Provider;
use crate::tools::ToolRegistry;

/// True when the input should terminate the session.
///
/// Exactly a case-insensitive `exit` (after trimming); `exit now` keeps
/// the session running.
fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}

/// System instruction for the chat session, naming the current working
/// directory as the repo path for local git tool calls.
fn system_prompt(repo_path: &Path) -> String {
    format!(
        "You're a git helper. You have access to both local git and GitHub \
         tools. Use {} as the repo_path when making local git calls.",
        repo_path.display()
    )
}

/// Runs the interactive chat REPL.
///
/// # Readline behavior
///
/// - **`exit`** (case-insensitive) or **Ctrl+D**: exits cleanly
/// - **Ctrl+C**: cancels current input, stays in the loop
/// - History is persisted to `~/.cache/gitgud/chat_history.txt`
pub async fn run_chat(provider: &Provider, tools: &ToolRegistry) -> Result<()> {
    let cwd = std::env::current_dir()?;

    println!(
        "{} [model: {}] (type 'exit' to quit)",
        "gitgud".bold().cyan(),
        provider.model().yellow(),
    );
    println!();

    let mut transcript: Vec<Message> = vec![Message::system(system_prompt(&cwd))];

    // Set up readline with persistent history
    let mut rl = DefaultEditor::new()?;
    let history_path = Settings::cache_dir()?.join(constants::HISTORY_FILENAME);
    if history_path.exists() {
        let _ = rl.load_history(&history_path);
    }

    loop {
        let readline = rl.readline(&format!("{} ", ">".green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if is_exit_command(&line) {
                    println!("{}", "goodbye.".dimmed());
                    break;
                }

                let _ = rl.add_history_entry(&line);

                transcript.push(Message::user(&line));
                println!();

                let mut renderer = StdoutRenderer::new();
                match provider
                    .stream_with_tools(
                        &transcript,
                        tools,
                        &mut renderer,
                        constants::MAX_TOOL_TURNS,
                    )
                    .await
                {
                    Ok(response) => {
                        transcript.push(Message::assistant(response));
                    }
                    Err(e) => {
                        // Pop the failed user message so the user can retry
                        transcript.pop();
                        eprintln!("{} {}", "error:".red().bold(), e);
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "goodbye.".dimmed());
                break;
            }
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                break;
            }
        }
    }

    // Save readline history
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_case_insensitive() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("Exit"));
        assert!(is_exit_command("  exit  "));
    }

    #[test]
    fn exit_must_match_whole_input() {
        assert!(!is_exit_command("Exit now"));
        assert!(!is_exit_command("please exit"));
        assert!(!is_exit_command(""));
        assert!(!is_exit_command("quit"));
    }

    #[test]
    fn system_prompt_names_the_repo_path() {
        let prompt = system_prompt(Path::new("/tmp/repo"));
        assert!(prompt.contains("/tmp/repo"));
        assert!(prompt.contains("repo_path"));
    }
}
