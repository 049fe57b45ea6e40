//! Command implementations for profile-cli

pub mod check;
pub mod resolve;
pub mod show;

pub use check::run_check;
pub use resolve::run_resolve;
pub use show::run_show;

use std::path::Path;

use profile_core::{MergeEngine, MergedState, ProfileWalker, WalkReport};

use crate::error::Result;

/// Walk `profile` into a fresh merge engine
fn merge(profile: &Path, recursive: bool) -> Result<(MergedState, WalkReport)> {
    let mut engine = MergeEngine::new();
    let report = ProfileWalker::new()
        .recursive(recursive)
        .walk(profile, &mut engine)?;
    Ok((engine.into_state(), report))
}

/// Final path component for compact listings
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
