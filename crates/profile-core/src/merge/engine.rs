//! The merging visitor

use std::borrow::Cow;
use std::path::Path;

use profile_formats::{Assignments, VariableLookup};

use super::state::{MergedState, Variable, VariableTable};
use crate::Result;
use crate::visitor::{Capabilities, ProfileVisitor};

/// Visitor that folds every fact into a [`MergedState`]
#[derive(Debug, Default)]
pub struct MergeEngine {
    state: MergedState,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MergedState {
        &self.state
    }

    pub fn into_state(self) -> MergedState {
        self.state
    }
}

impl ProfileVisitor for MergeEngine {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn on_package(&mut self, file: &str, token: &str, _source: &Path) -> Result<()> {
        self.state.flags_mut(file)?.apply(token);
        Ok(())
    }

    fn on_flag(&mut self, file: &str, token: &str, _source: &Path) -> Result<()> {
        self.state.flags_mut(file)?.apply(token);
        Ok(())
    }

    fn on_package_flag(&mut self, file: &str, atom: &str, flag: &str, _source: &Path) -> Result<()> {
        self.state.atom_flags_mut(file, atom)?.apply(flag);
        Ok(())
    }

    fn on_assignment(
        &mut self,
        file: &str,
        assignments: Assignments,
        source: &Path,
    ) -> Result<()> {
        tracing::debug!(
            %file,
            source = %source.display(),
            count = assignments.len(),
            "Merging assignments"
        );
        let table = self.state.variables_mut(file)?;
        for (key, value) in assignments.iter() {
            table.assign(key, value);
        }
        Ok(())
    }

    fn ancestor_context(&self, file: &str) -> Box<dyn VariableLookup + '_> {
        Box::new(VariableView::new(self.state.variables(file)))
    }
}

/// Read-only view of a variable table for `${NAME}` substitution.
///
/// Incremental variables are rendered to their `token -token` form on each
/// lookup.
#[derive(Debug, Clone, Copy)]
pub struct VariableView<'a> {
    table: Option<&'a VariableTable>,
}

impl<'a> VariableView<'a> {
    pub fn new(table: Option<&'a VariableTable>) -> Self {
        Self { table }
    }
}

impl VariableLookup for VariableView<'_> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.table?.get(name)? {
            Variable::Plain(value) => Some(Cow::Borrowed(value.as_str())),
            Variable::Incremental(set) => Some(Cow::Owned(set.render())),
        }
    }
}
