//! Settings types and persistence for gitgud.
//!
//! Settings are stored as JSON at the platform's config path
//! (e.g. `~/.config/gitgud/config.json` on Linux). A missing or corrupt
//! file silently degrades to defaults; the completeness prompt at startup
//! is the recovery path.

mod loader;
mod paths;
pub mod prompt;
mod resolve;
mod types;

pub use types::Settings;

use anyhow::Result;

impl Settings {
    /// Loads settings from the config file, then applies environment
    /// overrides (`OPENAI__API_KEY` and friends).
    ///
    /// File read or parse failures degrade to defaults rather than
    /// erroring; only config-path resolution can fail.
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from(&Self::config_path()?);
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Persists the settings to the config file as pretty JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }
}
