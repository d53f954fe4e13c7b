//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub selectors: SelectorConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub broadcast: BroadcastConfig,

    #[serde(default)]
    pub shortcuts: ShortcutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bridge HTTP/WebSocket server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3333
}

/// Remote-debugging channel to the conferencing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// HTTP endpoint of the remote-debugging port.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Substring of the page URL that identifies the target tab.
    #[serde(default = "default_target_url_contains")]
    pub target_url_contains: String,

    /// Upper bound for one evaluation round trip, connection included.
    #[serde(default = "default_eval_timeout_ms")]
    pub eval_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            target_url_contains: default_target_url_contains(),
            eval_timeout_ms: default_eval_timeout_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:9222".to_string()
}

fn default_target_url_contains() -> String {
    "discord.com".to_string()
}

fn default_eval_timeout_ms() -> u64 {
    5000
}

/// DOM selectors of the target page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Attribute carrying the tile identifier on the tile container.
    #[serde(default = "default_tile_attribute")]
    pub tile_attribute: String,

    /// Selector of the focus-target button inside a tile.
    #[serde(default = "default_focus_selector")]
    pub focus_selector: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            tile_attribute: default_tile_attribute(),
            focus_selector: default_focus_selector(),
        }
    }
}

fn default_tile_attribute() -> String {
    "data-selenium-video-tile".to_string()
}

fn default_focus_selector() -> String {
    r#".focusTarget__54e4b[role="button"]"#.to_string()
}

/// Stream engine behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Refreshes an id may be absent before its slot is reclaimed (0 = never).
    #[serde(default)]
    pub evict_after_absent_refreshes: u32,

    /// Delay before the first automatic refresh.
    #[serde(default = "default_initial_refresh_delay_ms")]
    pub initial_refresh_delay_ms: u64,

    /// Period of automatic refreshes (0 disables them).
    #[serde(default = "default_auto_refresh_secs")]
    pub auto_refresh_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            evict_after_absent_refreshes: 0,
            initial_refresh_delay_ms: default_initial_refresh_delay_ms(),
            auto_refresh_secs: default_auto_refresh_secs(),
        }
    }
}

fn default_initial_refresh_delay_ms() -> u64 {
    2000
}

fn default_auto_refresh_secs() -> u64 {
    30
}

/// Status broadcast to WebSocket subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastConfig {
    #[serde(default = "default_broadcast_interval")]
    pub interval_secs: u64,

    /// Minimum time between two "target not ready" warnings in the log.
    #[serde(default = "default_error_log_window")]
    pub error_log_window_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_broadcast_interval(),
            error_log_window_secs: default_error_log_window(),
        }
    }
}

fn default_broadcast_interval() -> u64 {
    10
}

fn default_error_log_window() -> u64 {
    60
}

/// Page-side keyboard shortcuts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// One of `alt`, `ctrl`, `ctrl+shift`, `meta`.
    #[serde(default = "default_modifier")]
    pub modifier: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            modifier: default_modifier(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_modifier() -> String {
    "alt".to_string()
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,

    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.tileswitch/logs".to_string()
}

fn default_max_log_files() -> usize {
    14
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
