//! Resolve command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;

use super::{file_name, merge};
use crate::error::Result;

/// Run the resolve command
///
/// Merges `profile` and its ancestors and dumps the result into `output`.
pub fn run_resolve(profile: &Path, output: &Path, recursive: bool) -> Result<()> {
    println!(
        "{} Resolving {}...",
        "=>".blue().bold(),
        profile.display().to_string().cyan()
    );

    let (state, report) = merge(profile, recursive)?;

    fs::create_dir_all(output)?;
    let written = state.dump(output)?;

    if written.is_empty() {
        println!(
            "{} Nothing to write: {} profile(s) contributed no facts.",
            "OK".green().bold(),
            report.profiles.len()
        );
        return Ok(());
    }

    println!(
        "{} Merged {} profile(s) into {}:",
        "OK".green().bold(),
        report.profiles.len(),
        output.display()
    );
    for path in &written {
        println!("   {} {}", "+".green(), file_name(path).cyan());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_test_utils::TestProfileTree;

    #[test]
    fn resolve_creates_output_directory() {
        let tree = TestProfileTree::new();
        tree.write("base", "use.mask", "X\n");
        tree.write("child", "use.mask", "-X\nY\n");
        tree.parents("child", &["base"]);
        let output = tree.root().join("nested/out");

        run_resolve(&tree.profile("child"), &output, true).unwrap();

        assert_eq!(tree.read("nested/out/use.mask"), "-X\nY\n");
    }

    #[test]
    fn resolve_without_recursion_ignores_parents() {
        let tree = TestProfileTree::new();
        tree.write("base", "packages", "*sys-apps/base\n");
        tree.write("child", "use.force", "X\n");
        tree.parents("child", &["base"]);
        let output = tree.dir("out");

        run_resolve(&tree.profile("child"), &output, false).unwrap();

        assert_eq!(tree.list("out"), vec!["use.force"]);
    }

    #[test]
    fn resolve_reports_parse_errors() {
        let tree = TestProfileTree::new();
        tree.write("p", "make.defaults", "A=\"unterminated\n");
        let output = tree.root().join("out");

        let err = run_resolve(&tree.profile("p"), &output, true).unwrap_err();

        assert!(err.to_string().contains("make.defaults"), "got: {err}");
        tree.assert_file_not_exists("out");
    }
}
