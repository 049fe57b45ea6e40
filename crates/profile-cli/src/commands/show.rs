//! Show command implementation

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use profile_core::MergedState;

use super::merge;
use crate::error::Result;

/// Run the show command
///
/// Prints the merged state to stdout, either as the canonical file contents
/// under a `# <file>` header each or as JSON.
pub fn run_show(profile: &Path, recursive: bool, json: bool) -> Result<()> {
    let (state, _) = merge(profile, recursive)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &state)
    } else {
        write_text(&mut out, &state)
    }
}

fn write_json(out: &mut impl Write, state: &MergedState) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, state)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, state: &MergedState) -> Result<()> {
    let files = state.render()?;
    for (index, (file, content)) in files.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format!("# {file}").bold())?;
        write!(out, "{content}")?;
    }
    Ok(())
}
