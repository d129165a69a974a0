pub mod docgen;
pub mod pkgconfig;

// Re-export all command functions for easier access
pub use docgen::*;
pub use pkgconfig::*;
