//! Error types for Nox

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Nox operations
pub type Result<T> = std::result::Result<T, NoxError>;

/// Main error type for Nox
#[derive(Error, Debug)]
pub enum NoxError {
    /// Registry and configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Argument binding errors
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// Seed dataset errors
    #[error("Seed data error: {0}")]
    Seed(#[from] SeedError),

    /// Network-layer failures during a remote call
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Persistent store errors
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry setup and application-configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("No default command has been designated")]
    NoDefaultCommand,

    #[error("Default command '{0}' is not registered")]
    UnknownDefaultCommand(String),

    #[error("Failed to read config file '{path}': {error}")]
    BadConfigFile { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while binding argument tokens onto a settings model
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Option '{field}' is required for command '{command}' but was not provided")]
    MissingRequired { command: String, field: String },

    #[error("{0}")]
    Parse(String),
}

/// Errors raised while loading the bundled seed dataset
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed dataset not found at '{path}': {source}")]
    Missing { path: PathBuf, source: io::Error },

    #[error("Seed dataset at '{path}' is malformed: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Specialized result type for registry/configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for binding operations
pub type BindingResult<T> = std::result::Result<T, BindingError>;
