//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "${VAR}".to_string(),
            message: e.to_string(),
        })?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.tileswitch`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.port, 3333);
        assert_eq!(config.remote.target_url_contains, "discord.com");
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [server]
            host = "0.0.0.0"
            port = 4000

            [remote]
            endpoint = "http://127.0.0.1:9333"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.remote.endpoint, "http://127.0.0.1:9333");
        assert_eq!(config.remote.eval_timeout_ms, 5000);
    }

    #[test]
    fn test_load_selectors_and_shortcuts() {
        let content = r#"
            [selectors]
            tile_attribute = "data-tile"
            focus_selector = ".focus"

            [shortcuts]
            modifier = "ctrl+shift"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.selectors.tile_attribute, "data-tile");
        assert_eq!(config.selectors.focus_selector, ".focus");
        assert_eq!(config.shortcuts.modifier, "ctrl+shift");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[broadcast]").unwrap();
        writeln!(file, "interval_secs = 3").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.broadcast.interval_secs, 3);
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let content = include_str!("../../../config/tileswitch.toml");
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.remote.endpoint, "http://localhost:9222");
        assert!(crate::ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/tileswitch.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/tileswitch.toml")).unwrap();
        assert_eq!(config.server.port, 3333);
    }

    #[test]
    fn test_load_or_default_invalid_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = [unclosed").unwrap();
        assert!(ConfigLoader::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: unique test-only variable name
        unsafe {
            std::env::set_var("TILESWITCH_TEST_ENDPOINT", "http://10.0.0.2:9222");
        }
        let content = "[remote]\nendpoint = \"${TILESWITCH_TEST_ENDPOINT}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.remote.endpoint, "http://10.0.0.2:9222");
        unsafe {
            std::env::remove_var("TILESWITCH_TEST_ENDPOINT");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_TILESWITCH_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/var/log"), "/var/log");
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/logs");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/logs"));
    }
}
