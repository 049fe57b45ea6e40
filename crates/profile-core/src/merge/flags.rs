//! Flag sets with `+`/`-` override semantics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names mapped to enabled (`true`) or explicitly disabled (`false`).
///
/// A later write for a name always replaces the earlier state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet {
    entries: BTreeMap<String, bool>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one token: `-name` disables `name`, anything else enables it
    pub fn apply(&mut self, token: &str) {
        match token.strip_prefix('-') {
            Some(name) => self.set(name, false),
            None => self.set(token, true),
        }
    }

    /// Apply every whitespace-separated token of `value` in order
    pub fn apply_all(&mut self, value: &str) {
        for token in value.split_whitespace() {
            self.apply(token);
        }
    }

    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.entries.insert(name.into(), enabled);
    }

    /// State of `name`, or `None` if never mentioned
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name) == Some(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens sorted by name, `name` when enabled and `-name` when disabled
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|(name, enabled)| {
            if *enabled {
                name.clone()
            } else {
                format!("-{name}")
            }
        })
    }

    /// All tokens joined by single spaces
    pub fn render(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FlagSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
