//! Format parsers
//!
//! Each parser reads one file and emits facts in file order. None of them
//! know anything about merging.

pub mod line_list;
pub mod package_flags;
pub mod shell;
mod words;

pub use package_flags::PackageFlag;
pub use shell::Assignments;

/// Whether a list-file line carries no fact (blank or `#` comment)
pub(crate) fn is_ignored_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
