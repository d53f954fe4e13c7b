//! Remote-control client for a running bridge.
//!
//! Every subcommand maps to one bridge endpoint; `watch` follows the status
//! channel instead.

use std::time::Duration;

use futures::StreamExt;
use reqwest::{Method, Url};
use serde_json::Value;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::cli::{Commands, SwitchArgs};

/// One HTTP call against the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BridgeCall {
    pub method: Method,
    pub segments: Vec<String>,
}

impl BridgeCall {
    fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Translate a remote-control subcommand. `serve` and `watch` have no call.
    pub fn from_command(command: &Commands) -> Option<Self> {
        let call = match command {
            Commands::Status => Self::get(&["api", "streams"]),
            Commands::Refresh => Self::post(&["api", "streams", "refresh"]),
            Commands::Next => Self::post(&["api", "streams", "next"]),
            Commands::Previous => Self::post(&["api", "streams", "previous"]),
            Commands::Swap => Self::post(&["api", "streams", "swap"]),
            Commands::Switch(SwitchArgs { id: Some(id), .. }) => {
                Self::post(&["api", "streams", "switch-by-id", id.as_str()])
            }
            Commands::Switch(SwitchArgs { index: Some(index), .. }) => {
                Self::post(&["api", "streams", "switch-by-index", &index.to_string()])
            }
            Commands::Switch(_) => return None,
            Commands::Button { number } => {
                Self::post(&["api", "stream-deck", "button", &number.to_string()])
            }
            Commands::Serve(_) | Commands::Watch { .. } => return None,
        };
        Some(call)
    }

    /// Full URL under `base`, with each segment percent-encoded.
    pub fn url(&self, base: &str) -> Result<Url, Box<dyn std::error::Error>> {
        let mut url = Url::parse(base)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| format!("bridge URL cannot carry a path: {}", base))?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

/// Status code and JSON body returned by the bridge.
#[derive(Debug)]
pub(crate) struct BridgeReply {
    pub status: u16,
    pub body: Value,
}

impl BridgeReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client bound to one bridge base URL.
pub(crate) struct BridgeClient {
    base: String,
    http: reqwest::Client,
}

impl BridgeClient {
    pub fn new(base: impl Into<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base: base.into(),
            http,
        })
    }

    pub async fn send(&self, call: &BridgeCall) -> Result<BridgeReply, Box<dyn std::error::Error>> {
        let url = call.url(&self.base)?;
        debug!("{} {}", call.method, url);

        let response = self
            .http
            .request(call.method.clone(), url)
            .send()
            .await
            .map_err(|e| format!("bridge at {} is not reachable: {}", self.base, e))?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(BridgeReply { status, body })
    }
}

/// Run one remote-control subcommand and print the bridge's JSON answer.
pub(crate) async fn run_command(
    bridge: &str,
    command: &Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    let call = BridgeCall::from_command(command).ok_or("command has no bridge endpoint")?;
    let reply = BridgeClient::new(bridge)?.send(&call).await?;

    println!("{}", serde_json::to_string_pretty(&reply.body)?);
    if reply.is_success() {
        Ok(())
    } else {
        Err(format!("bridge answered HTTP {}", reply.status).into())
    }
}

/// WebSocket URL of the status channel under an `http(s)://` bridge URL.
pub(crate) fn ws_url(base: &str) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = BridgeCall::get(&["ws"]).url(base)?;
    let scheme = match url.scheme() {
        "http" => "ws",
        "https" => "wss",
        "ws" | "wss" => return Ok(url),
        other => return Err(format!("unsupported bridge scheme: {}", other).into()),
    };
    url.set_scheme(scheme)
        .map_err(|_| format!("cannot switch {} to {}", base, scheme))?;
    Ok(url)
}

/// Render one status-channel frame for the terminal.
pub(crate) fn render_frame(text: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return text.to_string();
    };
    match value.get("type").and_then(Value::as_str) {
        Some("discord_error") => format!(
            "[{}] disconnected: {}",
            value["timestamp"].as_str().unwrap_or("-"),
            value["error"].as_str().unwrap_or("unknown error")
        ),
        _ => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
    }
}

/// Follow the status channel, reconnecting every `retry` until ctrl-c.
pub(crate) async fn watch(bridge: &str, retry: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let url = ws_url(bridge)?;
    let retry = retry.max(Duration::from_secs(1));

    loop {
        match connect_async(url.as_str()).await {
            Ok((mut stream, _)) => {
                info!("Connected to {}", url);
                loop {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => return Ok(()),
                        frame = stream.next() => match frame {
                            Some(Ok(Message::Text(text))) => println!("{}", render_frame(&text)),
                            Some(Ok(Message::Close(_))) | None => break,
                            Some(Ok(_)) => {}
                            Some(Err(e)) => {
                                warn!("Status channel error: {}", e);
                                break;
                            }
                        }
                    }
                }
                warn!("Disconnected from {}, retrying every {}s", url, retry.as_secs());
            }
            Err(e) => info!("Connect to {} failed: {}", url, e),
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Ok(()),
            _ = tokio::time::sleep(retry) => {}
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
