//! Direct git subprocess invocations.
//!
//! The commit workflow reads diffs through the MCP server but resolves the
//! repository root and executes the final commit by shelling out to `git`
//! itself. Arguments are passed as an argv vector, so the commit message
//! needs no shell quoting; [`display_command`] is only the human-readable
//! rendering.

use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::error::CommitError;

/// Resolves the repository root via `git rev-parse --show-toplevel`.
///
/// Nonzero exit, blank output, or a failure to launch git at all are each
/// reported as [`CommitError::NotARepository`] — the workflow never
/// proceeds with a guessed path.
pub async fn repo_root() -> Result<PathBuf, CommitError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .await
        .map_err(|_| CommitError::NotARepository)?;

    if !output.status.success() {
        return Err(CommitError::NotARepository);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let root = stdout.trim();
    if root.is_empty() {
        return Err(CommitError::NotARepository);
    }
    Ok(PathBuf::from(root))
}

/// Runs `git commit -m <message>` in `repo_root` and returns captured
/// stdout on success.
pub async fn commit(repo_root: &Path, message: &str) -> Result<String, CommitError> {
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(repo_root)
        .output()
        .await
        .map_err(|e| CommitError::CommitProcessFailed {
            code: -1,
            stderr: e.to_string(),
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(CommitError::CommitProcessFailed {
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// The shell command shown to the user (and copied to the clipboard),
/// with embedded double quotes escaped.
pub fn display_command(message: &str) -> String {
    format!("git commit -m \"{}\"", message.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_command_wraps_message() {
        assert_eq!(
            display_command("Closing #42. add foo"),
            "git commit -m \"Closing #42. add foo\""
        );
    }

    #[test]
    fn display_command_escapes_quotes() {
        assert_eq!(
            display_command("say \"hi\""),
            "git commit -m \"say \\\"hi\\\"\""
        );
    }
}
