//! Visitor interface the walker dispatches parsed facts to

use std::path::Path;

use profile_formats::{Assignments, EmptyLookup, EventKind, VariableLookup};

use crate::Result;

/// The event channels a visitor wants facts for.
///
/// The walker checks this once per file; channels left out are parsed but
/// never dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub package: bool,
    pub flag: bool,
    pub package_flag: bool,
    pub assignment: bool,
}

impl Capabilities {
    /// No channels; the walk only validates and traverses
    pub const fn none() -> Self {
        Self {
            package: false,
            flag: false,
            package_flag: false,
            assignment: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            package: true,
            flag: true,
            package_flag: true,
            assignment: true,
        }
    }

    /// Add one channel
    pub fn with(mut self, kind: EventKind) -> Self {
        *self.slot(kind) = true;
        self
    }

    pub fn supports(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Package => self.package,
            EventKind::Flag => self.flag,
            EventKind::PackageFlag => self.package_flag,
            EventKind::Assignment => self.assignment,
        }
    }

    fn slot(&mut self, kind: EventKind) -> &mut bool {
        match kind {
            EventKind::Package => &mut self.package,
            EventKind::Flag => &mut self.flag,
            EventKind::PackageFlag => &mut self.package_flag,
            EventKind::Assignment => &mut self.assignment,
        }
    }
}

/// Receiver of facts produced while walking a profile tree.
///
/// Handlers default to no-ops so a visitor only implements the channels it
/// advertises in [`ProfileVisitor::capabilities`]. `source` is the full path
/// of the file the fact came from.
pub trait ProfileVisitor {
    /// Channels this visitor handles
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }

    /// A token from a package line list (`packages`, `package.mask`, ...)
    fn on_package(&mut self, _file: &str, _token: &str, _source: &Path) -> Result<()> {
        Ok(())
    }

    /// A token from a flag line list (`use.mask`, `use.force`, ...)
    fn on_flag(&mut self, _file: &str, _token: &str, _source: &Path) -> Result<()> {
        Ok(())
    }

    /// One `(atom, flag)` pair from a package-flag list
    fn on_package_flag(
        &mut self,
        _file: &str,
        _atom: &str,
        _flag: &str,
        _source: &Path,
    ) -> Result<()> {
        Ok(())
    }

    /// Every assignment of one shell-assignment file
    fn on_assignment(
        &mut self,
        _file: &str,
        _assignments: Assignments,
        _source: &Path,
    ) -> Result<()> {
        Ok(())
    }

    /// Variables merged so far for `file`, used to expand `${NAME}` in the
    /// next assignment file
    fn ancestor_context(&self, file: &str) -> Box<dyn VariableLookup + '_>;
}

/// Visitor that handles no channels.
///
/// Walking with it parses every file and reports the traversal without
/// accumulating anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraversalVisitor;

impl ProfileVisitor for TraversalVisitor {
    fn ancestor_context(&self, _file: &str) -> Box<dyn VariableLookup + '_> {
        Box::new(EmptyLookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_supports_nothing() {
        let caps = Capabilities::none();
        for kind in [
            EventKind::Package,
            EventKind::Flag,
            EventKind::PackageFlag,
            EventKind::Assignment,
        ] {
            assert!(!caps.supports(kind));
            assert!(Capabilities::all().supports(kind));
        }
    }

    #[test]
    fn with_adds_single_channel() {
        let caps = Capabilities::none().with(EventKind::Flag);
        assert!(caps.supports(EventKind::Flag));
        assert!(!caps.supports(EventKind::Package));
        assert_eq!(caps.with(EventKind::Flag), caps);
    }

    #[test]
    fn traversal_visitor_has_empty_context() {
        let visitor = TraversalVisitor;
        assert_eq!(visitor.capabilities(), Capabilities::none());
        assert!(visitor.ancestor_context("make.defaults").lookup("USE").is_none());
    }
}
