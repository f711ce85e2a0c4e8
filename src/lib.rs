//! Nox - a multi-command console application
//!
//! Nox exposes a small set of independent subcommands through a shared
//! dispatch mechanism: a static greeting, a remote IP-geolocation lookup,
//! and a randomized multilingual phrase lookup backed by a lazily-seeded
//! SQLite store.

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod store;

// Re-export commonly used types
pub use error::{NoxError, Result};

/// Current version of Nox
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
