//! Layered application configuration
//!
//! Configuration is resolved from built-in defaults, an optional `nox.yml`
//! file, `NOX_*` environment variables, and command-line overrides, in that
//! order of increasing precedence.

pub mod load;
pub mod types;

// Re-export main types
pub use load::*;
pub use types::*;
