//! Package-flag-list parser: `atom flag -flag ...` per line

use std::io::{BufRead, Lines};
use std::vec;

use super::is_ignored_line;
use crate::error::Result;

/// One flag token associated with a package atom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFlag {
    pub atom: String,
    pub flag: String,
}

impl PackageFlag {
    pub fn new(atom: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            atom: atom.into(),
            flag: flag.into(),
        }
    }
}

/// Lazy sequence of `(atom, flag)` pairs from a package-flag-list file
#[derive(Debug)]
pub struct PackageFlags<R> {
    lines: Lines<R>,
    atom: String,
    pending: vec::IntoIter<String>,
}

/// Parse a package-flag-list stream.
///
/// The first whitespace-separated token of each line is the atom; every
/// following token is yielded as a flag of that atom, left to right.
pub fn parse<R: BufRead>(reader: R) -> PackageFlags<R> {
    PackageFlags {
        lines: reader.lines(),
        atom: String::new(),
        pending: Vec::new().into_iter(),
    }
}

impl<R: BufRead> Iterator for PackageFlags<R> {
    type Item = Result<PackageFlag>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(flag) = self.pending.next() {
                return Some(Ok(PackageFlag::new(self.atom.clone(), flag)));
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if is_ignored_line(&line) {
                continue;
            }

            let mut words = line.split_whitespace();
            let Some(atom) = words.next() else {
                continue;
            };
            self.atom = atom.to_string();
            self.pending = words.map(str::to_string).collect::<Vec<_>>().into_iter();
        }
    }
}
