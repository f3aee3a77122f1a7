//! Error taxonomy for the commit workflow.
//!
//! Every variant is reported to the user and ends the current command.
//! Nothing is retried automatically and none of these abort the process.

use thiserror::Error;

/// Failure exits of the guided commit workflow.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("not inside a git repository")]
    NotARepository,

    #[error("no issues were returned from the API")]
    NoIssuesReturned,

    #[error("unexpected JSON format for issues")]
    MalformedIssuePayload,

    #[error("no staged changes found")]
    NoStagedChanges,

    #[error("the {tool} tool reported an error: {detail}")]
    ToolCallFailed { tool: String, detail: String },

    #[error("failed to copy to clipboard: {0}")]
    ClipboardUnavailable(String),

    #[error("git commit failed with exit code {code}: {stderr}")]
    CommitProcessFailed { code: i32, stderr: String },
}
