// SPDX-License-Identifier: MPL-2.0

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Environment variable holding the settings as a JSON object.
pub const SETTINGS_VAR: &str = "WORKLOG_SETTINGS";

/// Where the log repository lives and how to reach its git remote.
///
/// Settings are loaded once at process start and handed to the components
/// that need them; nothing reads the environment after startup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    pub location: PathBuf,
    pub git: GitSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GitSettings {
    pub remote: String,
    pub branch: String,
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Settings> {
        serde_json::from_str(raw)
            .with_context(|| format!("could not parse settings from ${SETTINGS_VAR}"))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("could not serialize settings")
    }
}

/// Reads settings from the environment.  Every command except `setup`
/// refuses to run without them.
pub fn load_settings() -> Result<Settings> {
    let raw = env::var(SETTINGS_VAR)
        .ok()
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| {
            anyhow!("the work log repository is not set up yet, please run `wlog setup` first")
        })?;
    Settings::from_json(&raw)
}

pub fn settings_exist() -> bool {
    load_settings().is_ok()
}
