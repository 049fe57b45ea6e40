//! Ancestor variable lookup used during substitution

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Source of already-merged variable values consulted by `${NAME}` substitution
pub trait VariableLookup {
    /// Current value of `name`, if any ancestor assigned it
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Lookup with no variables, for profiles with no ancestor state
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyLookup;

impl VariableLookup for EmptyLookup {
    fn lookup(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl VariableLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl VariableLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}
