//! Configuration loading and layering

use crate::config::types::{AppConfig, ConfigOverrides, FileConfig};
use crate::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file searched for in the working directory
const CONFIG_FILE_NAME: &str = "nox.yml";

/// Load the application configuration with standard layering:
/// defaults, then `nox.yml` (if present), then `NOX_*` environment
/// variables, then command-line overrides.
pub fn load_config(overrides: &ConfigOverrides) -> ConfigResult<AppConfig> {
    // .env files participate in the environment layer, as in any other
    // environment variable.
    dotenvy::dotenv().ok();

    let mut config = AppConfig::default();

    let file_path = PathBuf::from(CONFIG_FILE_NAME);
    if file_path.is_file() {
        apply_file(&mut config, parse_config_file(&file_path)?);
    }

    apply_env(&mut config, |key| std::env::var(key).ok());
    apply_overrides(&mut config, overrides);

    Ok(config)
}

/// Parse a `nox.yml` configuration file
pub fn parse_config_file(path: &Path) -> ConfigResult<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::BadConfigFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigError::BadConfigFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Apply the file layer onto the configuration
pub fn apply_file(config: &mut AppConfig, file: FileConfig) {
    if let Some(database) = file.database {
        config.database = database;
    }
    if let Some(geo_endpoint) = file.geo_endpoint {
        config.geo_endpoint = geo_endpoint;
    }
    if let Some(accent) = file.accent {
        config.accent = accent;
    }
    if let Some(seed_data_file) = file.seed_data_file {
        config.seed_data_file = seed_data_file;
    }
}

/// Apply the environment layer onto the configuration
pub fn apply_env<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(database) = lookup("NOX_DATABASE") {
        config.database = PathBuf::from(database);
    }
    if let Some(geo_endpoint) = lookup("NOX_GEO_ENDPOINT") {
        config.geo_endpoint = geo_endpoint;
    }
    if let Some(accent) = lookup("NOX_ACCENT") {
        config.accent = accent;
    }
    if let Some(seed_data_file) = lookup("NOX_SEED_DATA") {
        config.seed_data_file = PathBuf::from(seed_data_file);
    }
}

/// Apply command-line overrides, the highest-precedence layer
pub fn apply_overrides(config: &mut AppConfig, overrides: &ConfigOverrides) {
    if let Some(database) = &overrides.database {
        config.database = database.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_layer_overrides_defaults() {
        let mut config = AppConfig::default();
        apply_file(
            &mut config,
            FileConfig {
                geo_endpoint: Some("http://localhost:9999".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(config.geo_endpoint, "http://localhost:9999");
        assert_eq!(config.accent, "cyan");
    }

    #[test]
    fn test_env_layer_overrides_file() {
        let mut config = AppConfig::default();
        apply_file(
            &mut config,
            FileConfig {
                accent: Some("magenta".to_string()),
                ..Default::default()
            },
        );

        let mut env = HashMap::new();
        env.insert("NOX_ACCENT".to_string(), "yellow".to_string());
        apply_env(&mut config, |key| env.get(key).cloned());

        assert_eq!(config.accent, "yellow");
    }

    #[test]
    fn test_cli_layer_overrides_env() {
        let mut config = AppConfig::default();

        let mut env = HashMap::new();
        env.insert("NOX_DATABASE".to_string(), "/tmp/env.db".to_string());
        apply_env(&mut config, |key| env.get(key).cloned());

        apply_overrides(
            &mut config,
            &ConfigOverrides {
                database: Some(PathBuf::from("/tmp/cli.db")),
            },
        );

        assert_eq!(config.database, PathBuf::from("/tmp/cli.db"));
    }

    #[test]
    fn test_parse_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nox.yml");
        fs::write(&path, "database: /tmp/test.db\naccent: green\n").unwrap();

        let file = parse_config_file(&path).unwrap();
        assert_eq!(file.database, Some(PathBuf::from("/tmp/test.db")));
        assert_eq!(file.accent.as_deref(), Some("green"));
    }

    #[test]
    fn test_parse_config_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nox.yml");
        fs::write(&path, "database: [not, a, path\n").unwrap();

        let result = parse_config_file(&path);
        assert!(matches!(result, Err(ConfigError::BadConfigFile { .. })));
    }
}
