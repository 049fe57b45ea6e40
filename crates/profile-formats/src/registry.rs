//! Recognized profile files and the formats that govern them

use serde::{Deserialize, Serialize};

/// Name of the file listing a profile's parent directories
pub const PARENT_FILE: &str = "parent";

/// Line-list files with this prefix carry flags rather than packages
pub const FLAG_FILE_PREFIX: &str = "use.";

/// Variables merged with `+`/`-` semantics instead of being replaced
pub const INCREMENTAL_VARIABLES: &[&str] = &[
    "USE",
    "USE_EXPAND",
    "USE_EXPAND_HIDDEN",
    "CONFIG_PROTECT",
    "CONFIG_PROTECT_MASK",
    "IUSE_IMPLICIT",
    "USE_EXPAND_IMPLICIT",
    "USE_EXPAND_UNPREFIXED",
];

/// Check whether a variable accumulates across the profile chain
pub fn is_incremental(name: &str) -> bool {
    INCREMENTAL_VARIABLES.contains(&name)
}

/// How a profile file is tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    /// One token per line, `-` prefix removes
    LineList,
    /// `atom flag -flag ...` per line
    PackageFlagList,
    /// Shell-style `KEY="value"` assignments
    ShellAssignmentBlock,
}

/// The visitor channel a parsed fact is delivered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Package,
    Flag,
    PackageFlag,
    Assignment,
}

impl EventKind {
    /// Stable name used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Flag => "flag",
            Self::PackageFlag => "package-flag",
            Self::Assignment => "assignment",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FileFormat {
    /// Event kind produced by a file of this format.
    ///
    /// Line lists are split by file name: names under [`FLAG_FILE_PREFIX`]
    /// go to the flag channel, everything else to the package channel.
    pub fn event_kind_for(&self, file_name: &str) -> EventKind {
        match self {
            Self::LineList if file_name.starts_with(FLAG_FILE_PREFIX) => EventKind::Flag,
            Self::LineList => EventKind::Package,
            Self::PackageFlagList => EventKind::PackageFlag,
            Self::ShellAssignmentBlock => EventKind::Assignment,
        }
    }
}

/// A recognized file name with its format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredFile {
    pub name: &'static str,
    pub format: FileFormat,
}

impl RegisteredFile {
    const fn new(name: &'static str, format: FileFormat) -> Self {
        Self { name, format }
    }

    /// Event kind this file's facts are delivered on
    pub fn event_kind(&self) -> EventKind {
        self.format.event_kind_for(self.name)
    }
}

/// Every file name the walker looks for in a profile directory, in walk order
pub const RECOGNIZED_FILES: &[RegisteredFile] = &[
    RegisteredFile::new("make.defaults", FileFormat::ShellAssignmentBlock),
    RegisteredFile::new("packages", FileFormat::LineList),
    RegisteredFile::new("packages.build", FileFormat::LineList),
    RegisteredFile::new("package.mask", FileFormat::LineList),
    RegisteredFile::new("package.provided", FileFormat::LineList),
    RegisteredFile::new("use.force", FileFormat::LineList),
    RegisteredFile::new("use.mask", FileFormat::LineList),
    RegisteredFile::new("use.stable.force", FileFormat::LineList),
    RegisteredFile::new("use.stable.mask", FileFormat::LineList),
    RegisteredFile::new("package.use", FileFormat::PackageFlagList),
    RegisteredFile::new("package.use.force", FileFormat::PackageFlagList),
    RegisteredFile::new("package.use.mask", FileFormat::PackageFlagList),
    RegisteredFile::new("package.use.stable.force", FileFormat::PackageFlagList),
    RegisteredFile::new("package.use.stable.mask", FileFormat::PackageFlagList),
];

/// Look up a recognized file by name
pub fn lookup(name: &str) -> Option<&'static RegisteredFile> {
    RECOGNIZED_FILES.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_assignment_file() {
        let shell: Vec<_> = RECOGNIZED_FILES
            .iter()
            .filter(|f| f.format == FileFormat::ShellAssignmentBlock)
            .collect();
        assert_eq!(shell.len(), 1);
        assert_eq!(shell[0].name, "make.defaults");
    }

    #[test]
    fn use_prefixed_line_lists_route_to_flags() {
        assert_eq!(lookup("use.mask").unwrap().event_kind(), EventKind::Flag);
        assert_eq!(lookup("use.stable.force").unwrap().event_kind(), EventKind::Flag);
        assert_eq!(lookup("package.mask").unwrap().event_kind(), EventKind::Package);
        assert_eq!(lookup("packages").unwrap().event_kind(), EventKind::Package);
    }

    #[test]
    fn package_use_files_are_not_routed_by_prefix() {
        // "package.use" is a package-flag list even though it contains "use."
        assert_eq!(
            lookup("package.use.mask").unwrap().event_kind(),
            EventKind::PackageFlag
        );
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = RECOGNIZED_FILES.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RECOGNIZED_FILES.len());
    }

    #[test]
    fn parent_and_unknown_files_are_not_recognized() {
        assert!(lookup(PARENT_FILE).is_none());
        assert!(lookup("make.conf").is_none());
    }

    #[test]
    fn incremental_variables() {
        assert!(is_incremental("USE"));
        assert!(is_incremental("CONFIG_PROTECT_MASK"));
        assert!(!is_incremental("CFLAGS"));
        assert!(!is_incremental("use"));
    }
}
