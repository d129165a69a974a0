//! Utility functions and helpers shared by the commands:
//!
//! - [`paths`] - DESTDIR redirection of the install prefix
//! - [`output`] - Formatted terminal output

/// Install-path resolution utilities
pub mod paths;

/// Output formatting and display utilities
pub mod output;

// Re-export commonly used utilities
pub use output::*;
pub use paths::*;
