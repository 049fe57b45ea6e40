//! Profile file formats for Profile Resolver
//!
//! Provides the stateless parsers for the three profile file formats and the
//! static registry that maps recognized file names to them. Parsers only emit
//! facts; merging is done by `profile-core`.

pub mod error;
pub mod lookup;
pub mod parsers;
pub mod registry;

pub use error::{Error, Result};
pub use lookup::{EmptyLookup, VariableLookup};
pub use parsers::{Assignments, PackageFlag};
pub use registry::{EventKind, FileFormat, RECOGNIZED_FILES, RegisteredFile};
