//! Layered settings for profile resolution front ends
//!
//! Settings are loaded and merged from these sources (later sources override
//! earlier):
//!
//! 1. **Built-in defaults** - recursive walk, no profile or output
//! 2. **Global config** - `<config_dir>/profile-resolver/config.toml`
//! 3. **Explicit config** - a file named on the command line
//!
//! Command-line flags are applied by the caller on top of the result.
//!
//! # Example
//!
//! ```no_run
//! use profile_core::config::SettingsResolver;
//!
//! let settings = SettingsResolver::new()
//!     .with_config_file("resolver.toml")
//!     .resolve()?;
//! println!("recursive: {}", settings.recursive);
//! # Ok::<(), profile_core::Error>(())
//! ```

mod resolver;
mod settings;

pub use resolver::{ResolvedSettings, SettingsResolver};
pub use settings::{ResolveSection, Settings};
