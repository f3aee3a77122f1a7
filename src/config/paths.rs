//! XDG path resolution for gitgud configuration and cache directories.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Settings;

impl Settings {
    /// Returns the platform-specific configuration directory for gitgud.
    ///
    /// Returns `~/.config/gitgud/` on Linux (`XDG_CONFIG_HOME/gitgud`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the platform-specific cache directory for gitgud.
    ///
    /// Returns `~/.cache/gitgud/` on Linux. Used for readline history.
    pub fn cache_dir() -> Result<PathBuf> {
        let dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the gitgud settings file.
    ///
    /// Returns `~/.config/gitgud/config.json` on Linux.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }
}
