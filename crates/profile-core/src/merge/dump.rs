//! Canonical text rendering and dumping of merged state

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::flags::FlagSet;
use super::state::{Category, MergedState, VariableTable};
use crate::{Error, Result, io};

impl MergedState {
    /// Render every non-empty category to its file content.
    ///
    /// Fails without rendering anything if a variable value contains `"`.
    pub fn render(&self) -> Result<BTreeMap<String, String>> {
        let mut files = BTreeMap::new();
        for (file, category) in self.iter() {
            let content = category.render(file)?;
            if !content.is_empty() {
                files.insert(file.to_string(), content);
            }
        }
        Ok(files)
    }

    /// Write one file per non-empty category into `dir`, which must exist.
    ///
    /// Everything is rendered before the first write, so a quote violation
    /// leaves `dir` untouched. Returns the paths written, sorted.
    pub fn dump(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let files = self.render()?;
        let mut written = Vec::with_capacity(files.len());
        for (file, content) in files {
            let path = dir.join(&file);
            io::write_atomic(&path, content.as_bytes())?;
            tracing::debug!(path = %path.display(), "Wrote merged file");
            written.push(path);
        }
        tracing::info!(dir = %dir.display(), files = written.len(), "Dumped merged state");
        Ok(written)
    }
}

impl Category {
    /// Canonical text of this category; empty when nothing is set
    pub fn render(&self, file: &str) -> Result<String> {
        let mut out = String::new();
        match self {
            Self::Flags(set) => {
                for token in set.tokens() {
                    out.push_str(&token);
                    out.push('\n');
                }
            }
            Self::PackageFlags(atoms) => render_package_flags(&mut out, atoms),
            Self::Variables(table) => render_variables(&mut out, file, table)?,
        }
        Ok(out)
    }
}

fn render_package_flags(out: &mut String, atoms: &BTreeMap<String, FlagSet>) {
    for (atom, flags) in atoms.iter().filter(|(_, flags)| !flags.is_empty()) {
        out.push_str(&format!("{} {}\n", atom, flags.render()));
    }
}

/// `KEY="value"` lines. `\` is escaped; `"` has no escape and is fatal.
fn render_variables(out: &mut String, file: &str, table: &VariableTable) -> Result<()> {
    for (key, variable) in table.iter() {
        let value = variable.render();
        if value.contains('"') {
            return Err(Error::QuoteInValue {
                file: file.to_string(),
                key: key.to_string(),
            });
        }
        out.push_str(&format!("{}=\"{}\"\n", key, value.replace('\\', "\\\\")));
    }
    Ok(())
}
