//! Line-list parser: one token per line

use std::io::{BufRead, Lines};

use super::is_ignored_line;
use crate::error::Result;

/// Lazy sequence of tokens from a line-list file
#[derive(Debug)]
pub struct LineTokens<R> {
    lines: Lines<R>,
}

/// Parse a line-list stream.
///
/// Blank lines and `#` comments are skipped; every other line yields its
/// trimmed text, keeping any leading `-`.
pub fn parse<R: BufRead>(reader: R) -> LineTokens<R> {
    LineTokens {
        lines: reader.lines(),
    }
}

impl<R: BufRead> Iterator for LineTokens<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) if is_ignored_line(&line) => continue,
                Ok(line) => return Some(Ok(line.trim().to_string())),
                Err(e) => return Some(Err(e.into())),
            }
        }
        None
    }
}
