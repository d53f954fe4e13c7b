//! Configuration validation.

use crate::schema::Config;

const MODIFIERS: [&str; 7] = [
    "alt",
    "ctrl",
    "control",
    "ctrl+shift",
    "control+shift",
    "meta",
    "cmd",
];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_remote(config, &mut result);
        Self::validate_selectors(config, &mut result);
        Self::validate_timing(config, &mut result);
        Self::validate_shortcuts(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        } else if !is_loopback(&config.server.host) {
            result.add_warning(ValidationWarning::new(
                "server.host",
                format!(
                    "'{}' is not a loopback address, the bridge has no authentication",
                    config.server.host
                ),
            ));
        }
    }

    fn validate_remote(config: &Config, result: &mut ValidationResult) {
        let endpoint = &config.remote.endpoint;
        if endpoint.is_empty() {
            result.add_error(ValidationError::new(
                "remote.endpoint",
                "Endpoint cannot be empty",
            ));
        } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            result.add_error(ValidationError::new(
                "remote.endpoint",
                "Endpoint must start with http:// or https://",
            ));
        }

        if config.remote.eval_timeout_ms == 0 {
            result.add_error(ValidationError::new(
                "remote.eval_timeout_ms",
                "eval_timeout_ms must be greater than 0",
            ));
        }

        if config.remote.target_url_contains.is_empty() {
            result.add_warning(ValidationWarning::new(
                "remote.target_url_contains",
                "Empty filter, the first open page will be used",
            ));
        }
    }

    fn validate_selectors(config: &Config, result: &mut ValidationResult) {
        if config.selectors.tile_attribute.is_empty() {
            result.add_error(ValidationError::new(
                "selectors.tile_attribute",
                "Tile attribute cannot be empty",
            ));
        }
        if config.selectors.focus_selector.is_empty() {
            result.add_error(ValidationError::new(
                "selectors.focus_selector",
                "Focus selector cannot be empty",
            ));
        }
    }

    fn validate_timing(config: &Config, result: &mut ValidationResult) {
        if config.broadcast.interval_secs == 0 {
            result.add_error(ValidationError::new(
                "broadcast.interval_secs",
                "interval_secs must be greater than 0",
            ));
        }

        let auto = config.engine.auto_refresh_secs;
        if auto > 0 && auto < config.broadcast.interval_secs {
            result.add_warning(ValidationWarning::new(
                "engine.auto_refresh_secs",
                format!(
                    "Auto-refresh every {}s is shorter than the {}s broadcast interval",
                    auto, config.broadcast.interval_secs
                ),
            ));
        }
    }

    fn validate_shortcuts(config: &Config, result: &mut ValidationResult) {
        let modifier = config.shortcuts.modifier.trim().to_ascii_lowercase();
        if !MODIFIERS.contains(&modifier.as_str()) {
            result.add_error(ValidationError::new(
                "shortcuts.modifier",
                format!(
                    "Unknown modifier '{}', valid values: {:?}",
                    config.shortcuts.modifier, MODIFIERS
                ),
            ));
        }
    }
}

fn is_loopback(host: &str) -> bool {
    host == "localhost"
        || host
            .parse::<std::net::IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
