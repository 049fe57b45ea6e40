//! Profile tree walking and merging for Profile Resolver
//!
//! This crate drives the parsers from `profile-formats` over a tree of
//! profile directories and folds the resulting facts into one merged state:
//!
//! - **Walker**: depth-first, parent-first traversal of `parent` files
//! - **Visitor**: capability-checked callbacks the walker dispatches facts to
//! - **MergeEngine**: the visitor that accumulates `+`/`-` overrides and
//!   dumps the canonical result
//! - **Settings**: layered TOML settings for front ends
//!
//! # Architecture
//!
//! ```text
//!        profile-cli
//!             |
//!        profile-core
//!   walker -> visitor -> merge
//!             |
//!       profile-formats
//!   registry + parsers
//! ```
//!
//! # Example
//!
//! ```no_run
//! use profile_core::{MergeEngine, walk};
//!
//! fn example() -> profile_core::Result<()> {
//!     let mut engine = MergeEngine::new();
//!     walk("profiles/default/linux/amd64", &mut engine)?;
//!     engine.state().dump("/tmp/merged".as_ref())?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod visitor;
pub mod walker;

pub use config::{ResolvedSettings, Settings, SettingsResolver};
pub use error::{Error, Result};
pub use merge::{Category, FlagSet, MergeEngine, MergedState, Variable, VariableTable};
pub use visitor::{Capabilities, ProfileVisitor, TraversalVisitor};
pub use walker::{ProfileWalker, WalkReport, walk};
