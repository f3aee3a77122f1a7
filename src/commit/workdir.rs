//! Scoped working-directory change.

use std::io;
use std::path::{Path, PathBuf};

/// Changes the process working directory and restores the previous one on
/// drop, so every exit path of the commit workflow (success, error, or
/// panic unwind) leaves the directory as it found it.
///
/// Not safe under concurrent workflows — the working directory is
/// process-global — but gitgud never spawns more than one.
pub struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    /// Switches to `target`, remembering the current directory.
    pub fn enter(target: &Path) -> io::Result<Self> {
        let original = std::env::current_dir()?;
        std::env::set_current_dir(target)?;
        Ok(Self { original })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_directory_on_drop() {
        let before = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        {
            let _guard = WorkdirGuard::enter(dir.path()).unwrap();
            let inside = std::env::current_dir().unwrap();
            // canonicalize: the tempdir may sit behind a symlink (macOS /tmp)
            assert_eq!(
                inside.canonicalize().unwrap(),
                dir.path().canonicalize().unwrap()
            );
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
