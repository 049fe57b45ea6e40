//! Merged state, one category per recognized file name

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use profile_formats::registry::is_incremental;

use super::flags::FlagSet;
use crate::{Error, Result};

/// One variable of an assignment file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    /// Replaced by every new assignment
    Plain(String),
    /// Accumulated with `+`/`-` semantics across the profile chain
    Incremental(FlagSet),
}

impl Variable {
    /// The value as it would appear on the right of `=`
    pub fn render(&self) -> String {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Incremental(set) => set.render(),
        }
    }
}

/// Variables of an assignment file, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTable {
    entries: BTreeMap<String, Variable>,
}

impl VariableTable {
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.get(name)
    }

    /// Plain value of `name`, `None` if unset or incremental
    pub fn plain(&self, name: &str) -> Option<&str> {
        match self.entries.get(name)? {
            Variable::Plain(value) => Some(value),
            Variable::Incremental(_) => None,
        }
    }

    /// Flag set of incremental `name`, `None` if unset or plain
    pub fn incremental(&self, name: &str) -> Option<&FlagSet> {
        match self.entries.get(name)? {
            Variable::Incremental(set) => Some(set),
            Variable::Plain(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one assignment.
    ///
    /// Incremental names fold the value's tokens into their flag set; every
    /// other name is replaced by the value.
    pub(crate) fn assign(&mut self, name: &str, value: &str) {
        if !is_incremental(name) {
            self.entries
                .insert(name.to_string(), Variable::Plain(value.to_string()));
            return;
        }
        match self.entries.get_mut(name) {
            Some(Variable::Incremental(set)) => set.apply_all(value),
            _ => {
                let mut set = FlagSet::new();
                set.apply_all(value);
                self.entries
                    .insert(name.to_string(), Variable::Incremental(set));
            }
        }
    }
}

/// Merged data for one recognized file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Category {
    /// Line-list files: name -> enabled
    Flags(FlagSet),
    /// Package-flag files: atom -> flag set
    PackageFlags(BTreeMap<String, FlagSet>),
    /// The assignment file
    Variables(VariableTable),
}

impl Category {
    fn kind(&self) -> &'static str {
        match self {
            Self::Flags(_) => "flag",
            Self::PackageFlags(_) => "package-flag",
            Self::Variables(_) => "variable",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flags(set) => set.is_empty(),
            Self::PackageFlags(atoms) => atoms.values().all(FlagSet::is_empty),
            Self::Variables(table) => table.is_empty(),
        }
    }
}

/// Everything merged during one resolution run, keyed by file name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedState {
    categories: BTreeMap<String, Category>,
}

impl MergedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file: &str) -> Option<&Category> {
        self.categories.get(file)
    }

    pub fn flags(&self, file: &str) -> Option<&FlagSet> {
        match self.categories.get(file)? {
            Category::Flags(set) => Some(set),
            _ => None,
        }
    }

    pub fn package_flags(&self, file: &str) -> Option<&BTreeMap<String, FlagSet>> {
        match self.categories.get(file)? {
            Category::PackageFlags(atoms) => Some(atoms),
            _ => None,
        }
    }

    pub fn variables(&self, file: &str) -> Option<&VariableTable> {
        match self.categories.get(file)? {
            Category::Variables(table) => Some(table),
            _ => None,
        }
    }

    /// File names with merged data, sorted
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Category::is_empty)
    }

    pub(crate) fn flags_mut(&mut self, file: &str) -> Result<&mut FlagSet> {
        match self.category_mut(file, || Category::Flags(FlagSet::new())) {
            Category::Flags(set) => Ok(set),
            other => Err(mismatch(file, other, "flag")),
        }
    }

    pub(crate) fn atom_flags_mut(&mut self, file: &str, atom: &str) -> Result<&mut FlagSet> {
        match self.category_mut(file, || Category::PackageFlags(BTreeMap::new())) {
            Category::PackageFlags(atoms) => Ok(atoms.entry(atom.to_string()).or_default()),
            other => Err(mismatch(file, other, "package-flag")),
        }
    }

    pub(crate) fn variables_mut(&mut self, file: &str) -> Result<&mut VariableTable> {
        match self.category_mut(file, || Category::Variables(VariableTable::default())) {
            Category::Variables(table) => Ok(table),
            other => Err(mismatch(file, other, "variable")),
        }
    }

    fn category_mut(&mut self, file: &str, create: impl FnOnce() -> Category) -> &mut Category {
        self.categories
            .entry(file.to_string())
            .or_insert_with(create)
    }
}

fn mismatch(file: &str, existing: &Category, incoming: &'static str) -> Error {
    Error::CategoryMismatch {
        file: file.to_string(),
        existing: existing.kind(),
        incoming,
    }
}
