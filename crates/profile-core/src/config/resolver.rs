//! Settings resolution with hierarchical merge

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::settings::Settings;
use crate::{Error, Result};

const APP_DIR: &str = "profile-resolver";
const CONFIG_FILE: &str = "config.toml";

/// The effective settings after merging all layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSettings {
    pub profile: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub recursive: bool,
}

impl From<Settings> for ResolvedSettings {
    fn from(settings: Settings) -> Self {
        Self {
            profile: settings.resolve.profile,
            output: settings.resolve.output,
            recursive: settings.resolve.recursive.unwrap_or(true),
        }
    }
}

/// Resolves settings by merging the global and explicit config files
#[derive(Debug, Clone, Default)]
pub struct SettingsResolver {
    /// Override for the global config directory (used for testing).
    /// When `None`, the platform directory from `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl SettingsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` instead of the platform config directory for the global layer
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Add an explicit settings file on top of the global layer.
    ///
    /// Unlike the global file, an explicit file must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.global_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join(APP_DIR))
    }

    /// Merge every layer into the effective settings
    pub fn resolve(&self) -> Result<ResolvedSettings> {
        let mut settings = Settings::default();

        if let Some(global_dir) = self.global_config_dir() {
            let global_path = global_dir.join(CONFIG_FILE);
            if global_path.is_file() {
                tracing::debug!(path = %global_path.display(), "Loading global settings");
                settings.merge(&load(&global_path)?);
            } else {
                tracing::debug!(path = %global_path.display(), "No global settings found");
            }
        }

        if let Some(ref path) = self.config_file {
            tracing::debug!(path = %path.display(), "Loading settings file");
            settings.merge(&load(path)?);
        }

        Ok(ResolvedSettings::from(settings))
    }
}

fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Settings::parse(&content).map_err(|e| Error::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
