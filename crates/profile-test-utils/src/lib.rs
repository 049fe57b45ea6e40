//! Shared test utilities for the profile-resolver workspace.
//!
//! This crate provides standardised profile-tree fixtures for the crate test
//! suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`tree`] - [`TestProfileTree`] builder for multi-profile directory trees

pub mod tree;

pub use tree::TestProfileTree;
