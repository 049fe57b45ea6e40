//! Error types for profile-formats

/// Result type for profile-formats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a profile file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: expected `=` after `{key}`, found `{found}`")]
    MissingEquals {
        key: String,
        found: String,
        line: usize,
    },

    #[error("line {line}: assignment to `{key}` has no value")]
    IncompleteAssignment { key: String, line: usize },

    #[error("line {line}: unterminated {quote} quote")]
    UnterminatedQuote { quote: char, line: usize },

    #[error("line {line}: trailing backslash at end of input")]
    TrailingEscape { line: usize },

    #[error("variable substitution did not converge for `{key}` after {passes} passes")]
    SubstitutionDidNotConverge { key: String, passes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error describes malformed file content rather than a read failure
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
