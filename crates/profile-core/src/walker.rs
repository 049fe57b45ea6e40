//! Depth-first, parent-first profile traversal
//!
//! For a profile `D` whose `parent` file lists `P1..Pn`, facts are delivered
//! in the order `P1 subtree, ..., Pn subtree, D`. Later facts override
//! earlier ones in the merge, so this order is the inheritance precedence.

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use profile_formats::parsers::{line_list, package_flags, shell};
use profile_formats::registry::{PARENT_FILE, RECOGNIZED_FILES, RegisteredFile};
use profile_formats::{EventKind, FileFormat};

use crate::visitor::ProfileVisitor;
use crate::{Error, Result, io};

/// What a walk visited, in visit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Profile directories, each listed when its own files are processed
    pub profiles: Vec<PathBuf>,
    /// Recognized files that were present and parsed
    pub files: Vec<PathBuf>,
}

/// Walks a profile tree and feeds a visitor
#[derive(Debug, Clone)]
pub struct ProfileWalker {
    recursive: bool,
}

impl Default for ProfileWalker {
    fn default() -> Self {
        Self { recursive: true }
    }
}

impl ProfileWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow `parent` files (the default). When disabled only the starting
    /// directory is processed.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Walk the profile at `path`, stopping at the first fatal error
    pub fn walk<V>(&self, path: impl AsRef<Path>, visitor: &mut V) -> Result<WalkReport>
    where
        V: ProfileVisitor + ?Sized,
    {
        let mut walk = Walk {
            visitor,
            recursive: self.recursive,
            report: WalkReport::default(),
            in_progress: Vec::new(),
        };
        walk.profile(path.as_ref())?;
        Ok(walk.report)
    }
}

/// Walk the profile at `path` and all of its ancestors
pub fn walk<V>(path: impl AsRef<Path>, visitor: &mut V) -> Result<WalkReport>
where
    V: ProfileVisitor + ?Sized,
{
    ProfileWalker::new().walk(path, visitor)
}

struct Walk<'v, V: ?Sized> {
    visitor: &'v mut V,
    recursive: bool,
    report: WalkReport,
    /// Profiles whose parents are being walked, for cycle detection
    in_progress: Vec<PathBuf>,
}

impl<V: ProfileVisitor + ?Sized> Walk<'_, V> {
    fn profile(&mut self, dir: &Path) -> Result<()> {
        let identity = identity(dir)?;

        if self.recursive {
            if self.in_progress.contains(&identity) {
                return Err(Error::InheritanceCycle { path: identity });
            }
            self.in_progress.push(identity.clone());
            for entry in read_parents(dir)? {
                self.profile(&dir.join(entry))?;
            }
            self.in_progress.pop();
        }

        tracing::info!(profile = %identity.display(), "Processing profile");
        for file in RECOGNIZED_FILES {
            self.file(&identity, file)?;
        }
        self.report.profiles.push(identity);
        Ok(())
    }

    fn file(&mut self, dir: &Path, file: &RegisteredFile) -> Result<()> {
        let path = dir.join(file.name);
        let Some(handle) = io::open_optional(&path)? else {
            tracing::trace!(path = %path.display(), "Skipping absent file");
            return Ok(());
        };

        let kind = file.event_kind();
        let dispatch = self.visitor.capabilities().supports(kind);
        tracing::debug!(
            path = %path.display(),
            event = %kind,
            dispatch,
            "Parsing profile file"
        );

        match file.format {
            FileFormat::LineList => {
                for token in line_list::parse(BufReader::new(handle)) {
                    let token = token.map_err(|e| Error::parse(&path, e))?;
                    if !dispatch {
                        continue;
                    }
                    if kind == EventKind::Flag {
                        self.visitor.on_flag(file.name, &token, &path)?;
                    } else {
                        self.visitor.on_package(file.name, &token, &path)?;
                    }
                }
            }
            FileFormat::PackageFlagList => {
                for pair in package_flags::parse(BufReader::new(handle)) {
                    let pair = pair.map_err(|e| Error::parse(&path, e))?;
                    if dispatch {
                        self.visitor
                            .on_package_flag(file.name, &pair.atom, &pair.flag, &path)?;
                    }
                }
            }
            FileFormat::ShellAssignmentBlock => {
                let mut source = String::new();
                BufReader::new(handle)
                    .read_to_string(&mut source)
                    .map_err(|e| Error::io(&path, e))?;
                let assignments = {
                    let context = self.visitor.ancestor_context(file.name);
                    shell::parse(&source, context.as_ref()).map_err(|e| Error::parse(&path, e))?
                };
                if dispatch {
                    self.visitor.on_assignment(file.name, assignments, &path)?;
                }
            }
        }

        self.report.files.push(path);
        Ok(())
    }
}

/// Canonical path of a profile directory.
///
/// A directory that does not exist has no files to contribute; it keeps its
/// joined path so the walk can carry on.
fn identity(dir: &Path) -> Result<PathBuf> {
    match fs::canonicalize(dir) {
        Ok(path) => Ok(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(profile = %dir.display(), "Profile directory does not exist");
            Ok(dir.to_path_buf())
        }
        Err(e) => Err(Error::io(dir, e)),
    }
}

/// Relative parent paths listed in `dir/parent`, in order.
///
/// Lines are trimmed and blank lines skipped; a missing file means no
/// parents.
fn read_parents(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(PARENT_FILE);
    let Some(handle) = io::open_optional(&path)? else {
        return Ok(Vec::new());
    };

    let mut parents = Vec::new();
    for line in BufReader::new(handle).lines() {
        let line = line.map_err(|e| Error::io(&path, e))?;
        let entry = line.trim();
        if !entry.is_empty() {
            parents.push(entry.to_string());
        }
    }
    tracing::debug!(parent_file = %path.display(), ?parents, "Read parent list");
    Ok(parents)
}
