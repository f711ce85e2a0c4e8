//! Execution context shared by command handlers

use crate::config::AppConfig;
use crate::error::Result;
use crate::output::OutputFormatter;
use crate::store::PhraseStore;
use std::path::Path;
use std::time::Duration;

/// Everything a handler may need: resolved configuration, an HTTP client,
/// an output formatter, and on-demand access to the phrase store. Each
/// handler uses only the collaborators its command requires.
pub struct CommandContext {
    /// Resolved application configuration
    pub config: AppConfig,
    /// Shared HTTP client for remote calls
    pub http: reqwest::Client,
    formatter: OutputFormatter,
}

impl CommandContext {
    /// Build a context from resolved configuration
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let formatter = OutputFormatter::from_color_name(&config.accent);

        CommandContext {
            config,
            http,
            formatter,
        }
    }

    /// The output formatter carrying the configured accent style
    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    /// Open the phrase store configured for this invocation
    pub fn open_store(&self) -> Result<PhraseStore> {
        if self.config.database == Path::new(":memory:") {
            PhraseStore::open_in_memory()
        } else {
            PhraseStore::open(&self.config.database)
        }
    }

    /// The geolocation endpoint base, without a trailing slash
    pub fn geo_endpoint(&self) -> &str {
        self.config.geo_endpoint.trim_end_matches('/')
    }
}
