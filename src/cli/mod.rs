//! Command registry and dispatch
//!
//! This module maps command names to handlers, binds raw argument tokens
//! onto typed settings, and turns handler results into process exit codes.

pub mod app;
pub mod settings;

// Re-export main types
pub use app::*;
pub use settings::*;
