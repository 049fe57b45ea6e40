//! Incremental merge of profile facts
//!
//! Every recognized file name owns one [`Category`] of merged state. Facts
//! are applied in walk order with last-write-wins per name:
//!
//! - `token` enables a name, `-token` disables it
//! - plain variables are replaced wholesale
//! - incremental variables (`USE`, `CONFIG_PROTECT`, ...) merge token by token
//!
//! The merged state renders back to the same file formats it was read from,
//! sorted, so a dump is itself a valid leaf profile.

mod dump;
mod engine;
mod flags;
mod state;

pub use engine::{MergeEngine, VariableView};
pub use flags::FlagSet;
pub use state::{Category, MergedState, Variable, VariableTable};
