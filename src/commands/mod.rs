//! Command handler variants
//!
//! Every command implements the same async execution contract, whether or
//! not it performs suspending work, so the dispatcher never distinguishes
//! handler shapes.

pub mod context;
pub mod hello;
pub mod ip;
pub mod yo;

// Re-export main types
pub use context::*;

use crate::cli::SettingsModel;
use crate::error::Result;
use async_trait::async_trait;

/// One subcommand's behavior over its bound settings. Returns the process
/// exit code: 0 for success, non-zero for a handler-specific failure.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, settings: &SettingsModel, ctx: &CommandContext) -> Result<i32>;
}
