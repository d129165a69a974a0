//! # y3c-xtask - Build Automation for the y3c Library
//!
//! Build and documentation automation for the y3c library, following the
//! [xtask pattern](https://github.com/matklad/cargo-xtask). Two independent
//! operations are provided, invoked by the Meson build at different phases:
//!
//! - **strip-private-requires**: after installation, rewrites the generated
//!   `y3c.pc` pkg-config file in place, dropping `Requires.private` lines so
//!   internal dependencies are not advertised to downstream consumers.
//! - **render-example-docs**: runs each compiled example binary, captures its
//!   combined stdout/stderr, and emits one Doxygen comment block per example
//!   into a single `examples.dox` file for the documentation build.
//!
//! ## Module Structure
//!
//! - [`commands`] - The two automation commands
//! - [`utils`] - Install-path resolution and terminal output helpers

/// Build and documentation commands
pub mod commands;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types and functions
pub use anyhow::{Context, Result};
pub use colored::Colorize;
