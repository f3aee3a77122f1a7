//! System clipboard bridge.
//!
//! Dispatches on the runtime OS: `pbcopy` on macOS, `xclip` falling back
//! to `xsel` on other unixes, and PowerShell's `Set-Clipboard` via a
//! temporary script on Windows. The temp script is a [`NamedTempFile`],
//! so it is deleted when the handle drops on every exit path.

use std::io::Write as _;
use std::process::Stdio;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::CommitError;

/// Places `text` on the system clipboard.
pub async fn copy(text: &str) -> Result<(), CommitError> {
    match std::env::consts::OS {
        "macos" => pipe_to("pbcopy", &[], text).await,
        "windows" => copy_windows(text).await,
        _ => {
            // Prefer xclip, fall back to xsel
            match pipe_to("xclip", &["-selection", "clipboard"], text).await {
                Ok(()) => Ok(()),
                Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text)
                    .await
                    .map_err(|_| {
                        CommitError::ClipboardUnavailable(
                            "neither xclip nor xsel is available".to_string(),
                        )
                    }),
            }
        }
    }
}

/// Spawns `command` and writes `text` to its stdin.
async fn pipe_to(command: &str, args: &[&str], text: &str) -> Result<(), CommitError> {
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| CommitError::ClipboardUnavailable(format!("{}: {}", command, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| CommitError::ClipboardUnavailable(format!("{}: {}", command, e)))?;
        // Close stdin so the utility sees EOF and exits
        drop(stdin);
    }

    let status = child
        .wait()
        .await
        .map_err(|e| CommitError::ClipboardUnavailable(format!("{}: {}", command, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(CommitError::ClipboardUnavailable(format!(
            "{} exited with code {}",
            command,
            status.code().unwrap_or(-1)
        )))
    }
}

/// Windows path: write a one-line `Set-Clipboard` script and run it.
/// The script file lives only as long as this function.
async fn copy_windows(text: &str) -> Result<(), CommitError> {
    let mut script = tempfile::Builder::new()
        .suffix(".ps1")
        .tempfile()
        .map_err(|e| CommitError::ClipboardUnavailable(e.to_string()))?;
    write_clipboard_script(&mut script, text)
        .map_err(|e| CommitError::ClipboardUnavailable(e.to_string()))?;

    let output = Command::new("powershell.exe")
        .args(["-ExecutionPolicy", "Bypass", "-File"])
        .arg(script.path())
        .output()
        .await
        .map_err(|e| CommitError::ClipboardUnavailable(format!("powershell: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CommitError::ClipboardUnavailable(format!(
            "powershell exited with code {}: {}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr)
        )))
    }
}

/// Writes the `Set-Clipboard` one-liner, escaping embedded double quotes
/// with PowerShell backticks.
fn write_clipboard_script(script: &mut NamedTempFile, text: &str) -> std::io::Result<()> {
    let escaped = text.replace('"', "`\"");
    write!(script, "Set-Clipboard -Value \"{}\"", escaped)?;
    script.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn script_escapes_double_quotes() {
        let mut script = tempfile::Builder::new().suffix(".ps1").tempfile().unwrap();
        write_clipboard_script(&mut script, "git commit -m \"msg\"").unwrap();

        let mut contents = String::new();
        script.reopen().unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(
            contents,
            "Set-Clipboard -Value \"git commit -m `\"msg`\"\""
        );
    }
}
