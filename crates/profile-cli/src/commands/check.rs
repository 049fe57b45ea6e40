//! Check command implementation

use std::path::Path;

use colored::Colorize;
use profile_core::{ProfileWalker, TraversalVisitor};
use profile_formats::registry;

use super::file_name;
use crate::error::Result;

/// Run the check command
///
/// Parses every recognized file in the tree without merging and lists the
/// profiles in the order their facts would be applied.
pub fn run_check(profile: &Path, recursive: bool) -> Result<()> {
    println!(
        "{} Checking {}...",
        "=>".blue().bold(),
        profile.display().to_string().cyan()
    );

    let report = ProfileWalker::new()
        .recursive(recursive)
        .walk(profile, &mut TraversalVisitor)?;

    for (index, dir) in report.profiles.iter().enumerate() {
        let files: Vec<_> = report
            .files
            .iter()
            .filter(|f| f.parent() == Some(dir.as_path()))
            .map(|f| {
                let name = file_name(f);
                match registry::lookup(&name) {
                    Some(entry) => format!("{} ({})", name, entry.event_kind()),
                    None => name,
                }
            })
            .collect();
        println!(
            "   {}. {}",
            index + 1,
            dir.display().to_string().cyan()
        );
        for file in files {
            println!("      {} {}", "-".dimmed(), file);
        }
    }

    println!(
        "{} {} profile(s), {} file(s) parsed without errors.",
        "OK".green().bold(),
        report.profiles.len(),
        report.files.len()
    );
    Ok(())
}
