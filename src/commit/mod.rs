//! Guided commit workflow.
//!
//! A single-shot flow: pick one of the caller's open assigned issues,
//! summarize the staged diff via the LLM, compose a commit message that
//! references the issue, then execute the commit, copy the command, or do
//! nothing. Every failure exit is reported to the user and ends the
//! workflow; nothing is retried and the process never aborts.

mod issues;
mod workdir;

pub use issues::{compose_commit_message, issue_search_query, parse_issues, Issue};

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use serde_json::json;
use std::sync::Arc;

use crate::clipboard;
use crate::content::first_text;
use crate::error::CommitError;
use crate::git;
use crate::mcp::{ToolCallOutput, ToolProvider};
use crate::output::CaptureRenderer;
use crate::provider::Provider;
use workdir::WorkdirGuard;

/// Extracts the text of a tool response, rejecting responses the server
/// flagged as errors. An error response's text block is a diagnostic
/// (e.g. "fatal: bad revision"), never data for the next step.
fn tool_response_text<'a>(
    tool: &str,
    response: &'a ToolCallOutput,
) -> Result<Option<&'a str>, CommitError> {
    if response.is_error {
        return Err(CommitError::ToolCallFailed {
            tool: tool.to_string(),
            detail: first_text(&response.blocks)
                .unwrap_or("no detail provided")
                .to_string(),
        });
    }
    Ok(first_text(&response.blocks))
}

/// Validates the staged-diff text: blank or whitespace-only means there
/// is nothing to commit, checked before any LLM call.
fn staged_diff(text: Option<&str>) -> Result<&str, CommitError> {
    match text {
        Some(diff) if !diff.trim().is_empty() => Ok(diff),
        _ => Err(CommitError::NoStagedChanges),
    }
}

/// Runs the commit workflow for `org`.
///
/// The process working directory is switched to the repository root for
/// the duration and restored on every exit path by the guard.
pub async fn run(
    org: &str,
    git_provider: &Arc<ToolProvider>,
    github_provider: &Arc<ToolProvider>,
    llm: &Provider,
) -> Result<()> {
    let repo_root = git::repo_root().await?;
    let _guard = WorkdirGuard::enter(&repo_root)?;
    println!(
        "{}",
        format!("Working in git repository: {}", repo_root.display()).dimmed()
    );

    // Fetch and parse assigned issues
    println!(
        "{}",
        format!("Fetching assigned issues for organization '{}'...", org).yellow()
    );
    let response = github_provider
        .call_tool("search_issues", json!({ "q": issue_search_query(org) }))
        .await?;
    let issues_text = tool_response_text("search_issues", &response)?.unwrap_or_default();
    if issues_text.trim().is_empty() {
        return Err(CommitError::NoIssuesReturned.into());
    }
    let issues = parse_issues(issues_text)?;
    if issues.is_empty() {
        println!("{}", "No open issues found.".red());
        return Ok(());
    }

    // Pick exactly one issue
    let labels: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    let index = Select::new()
        .with_prompt("Select an issue to connect this commit to")
        .items(&labels)
        .default(0)
        .interact()?;
    let issue = &issues[index];

    // Fetch the staged diff through the git MCP server
    println!("{}", "Fetching staged changes...".yellow());
    let response = git_provider
        .call_tool("git_diff_staged", json!({ "repo_path": repo_root }))
        .await?;
    let changes = staged_diff(tool_response_text("git_diff_staged", &response)?)?.to_string();

    // Summarize via the LLM, with no tools registered and no echo of
    // partial tokens
    println!("{}", "Summarizing changes...".yellow());
    println!("{}", changes.dimmed());
    let prompt = format!("{}\n{}", crate::constants::SUMMARY_PROMPT, changes);
    let mut renderer = CaptureRenderer::new();
    llm.stream_prompt(&prompt, &mut renderer).await?;
    let summary = renderer.into_text().trim().to_string();

    let message = compose_commit_message(issue.number, &summary);
    println!("{}", "Commit message generated:".green());
    println!("{}", message);
    println!();

    let command = git::display_command(&message);
    println!("{} {}", "Command:".blue(), command);

    // Three-way disposition, terminal either way
    let choice = Select::new()
        .with_prompt("What would you like to do with this command?")
        .items(&["Execute it directly", "Copy to clipboard", "Do nothing"])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            println!("{}", "Executing git commit...".yellow());
            let stdout = git::commit(&repo_root, &message).await?;
            println!("{}", "Commit successful!".green());
            if !stdout.trim().is_empty() {
                println!("{}", stdout);
            }
        }
        1 => {
            clipboard::copy(&command).await?;
            println!("{}", "Command copied to clipboard!".green());
        }
        _ => {
            println!(
                "{}",
                "Command not executed or copied. You can run it manually.".dimmed()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBlock;

    #[test]
    fn flagged_tool_error_aborts_instead_of_flowing_as_data() {
        // A git error message is non-blank text; without the flag check
        // it would pass the staged-diff guard and be summarized as a diff.
        let response = ToolCallOutput {
            blocks: vec![ContentBlock::Text {
                text: "fatal: bad revision".to_string(),
            }],
            is_error: true,
        };
        let err = tool_response_text("git_diff_staged", &response).unwrap_err();
        match err {
            CommitError::ToolCallFailed { tool, detail } => {
                assert_eq!(tool, "git_diff_staged");
                assert_eq!(detail, "fatal: bad revision");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn flagged_tool_error_without_text_still_aborts() {
        let response = ToolCallOutput {
            blocks: Vec::new(),
            is_error: true,
        };
        let err = tool_response_text("search_issues", &response).unwrap_err();
        assert!(matches!(err, CommitError::ToolCallFailed { .. }));
        assert_eq!(
            err.to_string(),
            "the search_issues tool reported an error: no detail provided"
        );
    }

    #[test]
    fn successful_tool_response_yields_first_text() {
        let response = ToolCallOutput {
            blocks: vec![ContentBlock::Text {
                text: "diff --git a/x b/x".to_string(),
            }],
            is_error: false,
        };
        assert_eq!(
            tool_response_text("git_diff_staged", &response).unwrap(),
            Some("diff --git a/x b/x")
        );
    }

    #[test]
    fn blank_diff_is_rejected() {
        assert!(matches!(
            staged_diff(Some("")),
            Err(CommitError::NoStagedChanges)
        ));
        assert!(matches!(
            staged_diff(Some("   \n\t")),
            Err(CommitError::NoStagedChanges)
        ));
        assert!(matches!(
            staged_diff(None),
            Err(CommitError::NoStagedChanges)
        ));
    }

    #[test]
    fn non_blank_diff_passes() {
        assert_eq!(
            staged_diff(Some("diff --git a/x b/x")).unwrap(),
            "diff --git a/x b/x"
        );
    }
}
