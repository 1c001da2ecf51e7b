//! # Configuration
//!
//! User settings stored in `~/.config/standup/config.json`.
//!
//! ## Overview
//!
//! [`Config`] holds the team roster shown in the member picker, who the
//! summary goes to, the closing signature and the colour theme. Entries typed
//! into the form are never written here; they only live for the session.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "team_members": ["Kiran", "Pranav"],
//!   "recipients": ["team@example.com"],
//!   "signature": "MoM Team"
//! }
//! ```
//!
//! The `directories` crate resolves the platform config directory.

use crate::mail::{MailSettings, DEFAULT_SIGNATURE};
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@,]+@[^\s@,]+\.[^\s@,]+$").expect("email pattern compiles")
});

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Names offered by the member picker, in display order
    #[serde(default = "default_team_members")]
    pub team_members: Vec<String>,

    /// Addresses the summary is sent to
    #[serde(default)]
    pub recipients: Vec<String>,

    /// Copy list; when absent everyone in `recipients` is copied as well
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,

    #[serde(default = "default_signature")]
    pub signature: String,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_team_members() -> Vec<String> {
    ["Kiran", "Pranav", "Gokul", "Naveen"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_signature() -> String {
    DEFAULT_SIGNATURE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            team_members: default_team_members(),
            recipients: Vec::new(),
            cc: None,
            signature: default_signature(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the default config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "standup")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Reject settings the form cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.team_members.is_empty() {
            bail!("team_members must list at least one name");
        }

        let mut seen = HashSet::new();
        for member in &self.team_members {
            if member.trim().is_empty() {
                bail!("team_members contains an empty name");
            }
            if !seen.insert(member.as_str()) {
                bail!("team member '{}' is listed twice", member);
            }
        }

        let cc = self.cc.iter().flatten();
        for address in self.recipients.iter().chain(cc) {
            if !EMAIL_RE.is_match(address.trim()) {
                bail!("'{}' is not a valid email address", address);
            }
        }

        Ok(())
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            recipients: self.recipients.clone(),
            cc: self.cc.clone(),
            signature: self.signature.clone(),
        }
    }
}
