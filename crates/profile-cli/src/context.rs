//! Run context: command-line arguments layered over resolved settings

use std::path::{Path, PathBuf};

use profile_core::{ResolvedSettings, SettingsResolver};

use crate::cli::WalkArgs;
use crate::error::{CliError, Result};

/// Settings every command works from once all layers are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    settings: ResolvedSettings,
}

impl RunContext {
    /// Load the global settings and, when given, the `--config` file
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let mut resolver = SettingsResolver::new();
        if let Some(path) = config {
            resolver = resolver.with_config_file(path);
        }
        Ok(Self::from_settings(resolver.resolve()?))
    }

    pub fn from_settings(settings: ResolvedSettings) -> Self {
        Self { settings }
    }

    /// Profile directory to walk; the argument wins over settings
    pub fn profile(&self, walk: &WalkArgs) -> Result<PathBuf> {
        let profile = walk
            .profile
            .clone()
            .or_else(|| self.settings.profile.clone())
            .ok_or_else(|| {
                CliError::user(
                    "No profile given. Pass a PROFILE argument or set `resolve.profile` in settings",
                )
            })?;
        if !profile.is_dir() {
            return Err(CliError::user(format!(
                "Profile directory not found: {}",
                profile.display()
            )));
        }
        Ok(profile)
    }

    /// Whether to follow `parent` files
    pub fn recursive(&self, walk: &WalkArgs) -> bool {
        self.settings.recursive && !walk.no_recursive
    }

    /// Dump directory; the argument wins over settings
    pub fn output(&self, output: Option<PathBuf>) -> Result<PathBuf> {
        output
            .or_else(|| self.settings.output.clone())
            .ok_or_else(|| {
                CliError::user(
                    "No output directory given. Pass --output or set `resolve.output` in settings",
                )
            })
    }
}
