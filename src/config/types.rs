//! Application configuration types

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite database holding the phrase table
    pub database: PathBuf,

    /// Base URL of the geolocation endpoint
    pub geo_endpoint: String,

    /// Accent color used to highlight command output
    pub accent: String,

    /// Path to the bundled phrase dataset used for first-time seeding
    pub seed_data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database: default_database_path(),
            geo_endpoint: "https://ipinfo.io".to_string(),
            accent: "cyan".to_string(),
            seed_data_file: PathBuf::from("resources/seed/hello.json"),
        }
    }
}

/// Database path under the platform data directory, falling back to the
/// working directory when no home is available.
fn default_database_path() -> PathBuf {
    ProjectDirs::from("", "", "nox")
        .map(|dirs| dirs.data_dir().join("nox.db"))
        .unwrap_or_else(|| PathBuf::from("nox.db"))
}

/// Optional values read from a `nox.yml` configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub database: Option<PathBuf>,

    #[serde(default)]
    pub geo_endpoint: Option<String>,

    #[serde(default)]
    pub accent: Option<String>,

    #[serde(default)]
    pub seed_data_file: Option<PathBuf>,
}

/// Values supplied on the command line, overriding every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database: Option<PathBuf>,
}
