//! Bridge initialization and startup logic for TileSwitch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tileswitch_api::{AppState, AutoRefresher, InterfaceConfig, InterfaceServer, StatusBroadcaster};
use tileswitch_cdp::{
    CdpEvaluator, PageActivator, PageSelectors, PageShortcutHook, PageTileSource, RemoteEvaluator,
};
use tileswitch_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use tileswitch_engine::{EngineHandle, EvictionPolicy, ShortcutMap, ShortcutModifier, StreamEngine};

use crate::cli::ServeArgs;

/// Initialize tracing with console and file output.
///
/// Log files rotate daily under the configured directory.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir(&logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tileswitch")
        .filename_suffix("log")
        .max_log_files(logging.max_files.max(1))
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes the file writer on drop; keep it for the process lifetime.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

fn log_dir(configured: &str) -> PathBuf {
    let expanded = ConfigLoader::expand_path(configured);
    if expanded.is_empty() {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tileswitch")
            .join("logs")
    } else {
        PathBuf::from(expanded)
    }
}

/// Fold `serve` flags into the loaded configuration.
pub(crate) fn apply_overrides(mut config: Config, args: &ServeArgs) -> Config {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(endpoint) = &args.endpoint {
        config.remote.endpoint = endpoint.clone();
    }
    config
}

/// URL the page-side hook posts key chords to.
///
/// A wildcard listen address is not routable from the page, so it maps to loopback.
pub(crate) fn shortcut_url(host: &str, port: u16) -> String {
    let host = match host {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        other => other,
    };
    if host.contains(':') && !host.starts_with('[') {
        format!("http://[{}]:{}/api/shortcut", host, port)
    } else {
        format!("http://{}:{}/api/shortcut", host, port)
    }
}

/// Run the bridge in foreground until ctrl-c.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting TileSwitch v{}", env!("CARGO_PKG_VERSION"));

    let report = ConfigValidator::validate(&config);
    for warning in &report.warnings {
        warn!("Config: {}", warning);
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!("Config: {}", err);
        }
        return Err(format!("invalid configuration ({} errors)", report.errors.len()).into());
    }

    let modifier: ShortcutModifier = config.shortcuts.modifier.parse()?;

    let evaluator: Arc<dyn RemoteEvaluator> = Arc::new(CdpEvaluator::new(
        config.remote.endpoint.clone(),
        config.remote.target_url_contains.clone(),
        Duration::from_millis(config.remote.eval_timeout_ms),
    ));
    info!(
        "Remote endpoint: {} (target URL contains '{}')",
        config.remote.endpoint, config.remote.target_url_contains
    );

    let selectors = PageSelectors {
        tile_attribute: config.selectors.tile_attribute.clone(),
        focus_selector: config.selectors.focus_selector.clone(),
    };
    let source = Arc::new(PageTileSource::new(evaluator.clone(), selectors.clone()));
    let activator = Arc::new(PageActivator::new(evaluator.clone(), selectors));

    let policy = EvictionPolicy::from_absent_refreshes(config.engine.evict_after_absent_refreshes);
    let engine = Arc::new(EngineHandle::new(StreamEngine::new(source, activator, policy)));
    info!("Stream engine initialized (eviction: {:?})", policy);

    let error_window = Duration::from_secs(config.broadcast.error_log_window_secs);
    let state = Arc::new(
        AppState::new(engine.clone(), ShortcutMap::new(modifier))
            .with_error_log_window(error_window),
    );

    let shutdown = CancellationToken::new();

    let broadcaster = StatusBroadcaster::new(
        state.clone(),
        Duration::from_secs(config.broadcast.interval_secs),
    );
    tokio::spawn(broadcaster.run(shutdown.child_token()));

    let mut refresher = AutoRefresher::new(
        engine,
        Duration::from_millis(config.engine.initial_refresh_delay_ms),
        Duration::from_secs(config.engine.auto_refresh_secs),
    )
    .with_error_log_window(error_window);
    if config.shortcuts.enabled {
        let url = shortcut_url(&config.server.host, config.server.port);
        info!("Keyboard shortcuts: {} + key, forwarded to {}", modifier, url);
        refresher = refresher.with_hook(Arc::new(PageShortcutHook::new(evaluator, url, modifier)));
    }
    tokio::spawn(refresher.run(shutdown.child_token()));

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
        signal_token.cancel();
    });

    let server = InterfaceServer::new(
        InterfaceConfig::new(config.server.host.clone(), config.server.port),
        state,
    );
    let result = server.run(shutdown.clone()).await;
    shutdown.cancel();
    result
}
