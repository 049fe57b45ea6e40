//! Shell-assignment-block parser with `${NAME}` substitution

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::words::{self, Word};
use crate::error::{Error, Result};
use crate::lookup::VariableLookup;

/// Pattern for a braced variable reference, capturing the name
pub static VARIABLE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}").unwrap());

/// Every assignment made by one file, keyed in first-assignment order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    entries: Vec<(String, String)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value assigned to `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Assign `value` to `key`, replacing an earlier assignment in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Assignments {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Assignments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut assignments = Self::new();
        for (k, v) in iter {
            assignments.insert(k, v);
        }
        assignments
    }
}

/// Parse a shell-assignment file.
///
/// Words are read in `KEY = VALUE` triples. Each value has its `${NAME}`
/// references expanded against earlier assignments in this file first,
/// then `ancestors`, then the empty string. The whole file becomes one
/// [`Assignments`] fact.
pub fn parse(source: &str, ancestors: &dyn VariableLookup) -> Result<Assignments> {
    let mut assignments = Assignments::new();
    let mut words = words::split(source)?.into_iter();

    while let Some(key) = words.next() {
        let value = match (words.next(), words.next()) {
            (Some(eq), Some(value)) if eq.is_assign => value,
            (Some(eq), _) if !eq.is_assign => {
                return Err(Error::MissingEquals {
                    key: key.text,
                    found: eq.text,
                    line: eq.line,
                });
            }
            _ => {
                return Err(Error::IncompleteAssignment {
                    key: key.text,
                    line: key.line,
                });
            }
        };

        let Word { text: key, .. } = key;
        let expanded = substitute(&key, value.text, &assignments, ancestors)?;
        tracing::trace!(%key, value = %expanded, "Parsed assignment");
        assignments.insert(key, expanded);
    }

    Ok(assignments)
}

/// Expand `${NAME}` references until none remain.
///
/// One pass replaces every reference found in a single scan. Expansion can
/// splice together a new reference, so passes repeat; more passes than
/// distinct names seen plus one means the value will never settle.
fn substitute(
    key: &str,
    mut value: String,
    assigned: &Assignments,
    ancestors: &dyn VariableLookup,
) -> Result<String> {
    let mut seen = BTreeSet::new();
    let mut passes = 0;

    while VARIABLE_REFERENCE.is_match(&value) {
        seen.extend(
            VARIABLE_REFERENCE
                .captures_iter(&value)
                .map(|caps| caps[1].to_string()),
        );
        if passes > seen.len() {
            return Err(Error::SubstitutionDidNotConverge {
                key: key.to_string(),
                passes,
            });
        }
        passes += 1;

        let expanded = VARIABLE_REFERENCE
            .replace_all(&value, |caps: &Captures<'_>| {
                resolve(&caps[1], assigned, ancestors).into_owned()
            })
            .into_owned();
        tracing::trace!(%key, pass = passes, value = %expanded, "Substituted variables");
        value = expanded;
    }

    Ok(value)
}

fn resolve<'a>(
    name: &str,
    assigned: &'a Assignments,
    ancestors: &'a dyn VariableLookup,
) -> Cow<'a, str> {
    assigned
        .get(name)
        .map(Cow::Borrowed)
        .or_else(|| ancestors.lookup(name))
        .unwrap_or_default()
}
