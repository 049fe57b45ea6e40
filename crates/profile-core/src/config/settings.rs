//! Settings file schema

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of one settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub resolve: ResolveSection,
}

/// The `[resolve]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSection {
    /// Profile directory to resolve
    pub profile: Option<PathBuf>,
    /// Directory the merged files are dumped into
    pub output: Option<PathBuf>,
    /// Whether to follow `parent` files
    pub recursive: Option<bool>,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merge(&mut self, other: &Settings) {
        let ours = &mut self.resolve;
        let theirs = &other.resolve;
        if theirs.profile.is_some() {
            ours.profile = theirs.profile.clone();
        }
        if theirs.output.is_some() {
            ours.output = theirs.output.clone();
        }
        if theirs.recursive.is_some() {
            ours.recursive = theirs.recursive;
        }
    }
}
