use super::*;
use crate::cli::ServeArgs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "http://127.0.0.1:3333";

fn url_of(command: Commands) -> String {
    BridgeCall::from_command(&command)
        .unwrap()
        .url(BASE)
        .unwrap()
        .to_string()
}

#[test]
fn test_command_endpoints() {
    assert_eq!(url_of(Commands::Status), "http://127.0.0.1:3333/api/streams");
    assert_eq!(
        url_of(Commands::Refresh),
        "http://127.0.0.1:3333/api/streams/refresh"
    );
    assert_eq!(url_of(Commands::Next), "http://127.0.0.1:3333/api/streams/next");
    assert_eq!(
        url_of(Commands::Previous),
        "http://127.0.0.1:3333/api/streams/previous"
    );
    assert_eq!(url_of(Commands::Swap), "http://127.0.0.1:3333/api/streams/swap");
    assert_eq!(
        url_of(Commands::Button { number: 4 }),
        "http://127.0.0.1:3333/api/stream-deck/button/4"
    );
    assert_eq!(
        url_of(Commands::Switch(SwitchArgs {
            id: None,
            index: Some(2)
        })),
        "http://127.0.0.1:3333/api/streams/switch-by-index/2"
    );
}

#[test]
fn test_methods() {
    let status = BridgeCall::from_command(&Commands::Status).unwrap();
    assert_eq!(status.method, Method::GET);
    let next = BridgeCall::from_command(&Commands::Next).unwrap();
    assert_eq!(next.method, Method::POST);
}

#[test]
fn test_switch_id_is_percent_encoded() {
    let url = url_of(Commands::Switch(SwitchArgs {
        id: Some("user 1/cam".to_string()),
        index: None,
    }));
    assert_eq!(
        url,
        "http://127.0.0.1:3333/api/streams/switch-by-id/user%201%2Fcam"
    );
}

#[test]
fn test_base_with_trailing_slash_or_prefix() {
    let call = BridgeCall::from_command(&Commands::Status).unwrap();
    assert_eq!(
        call.url("http://pad:3333/").unwrap().as_str(),
        "http://pad:3333/api/streams"
    );
    assert_eq!(
        call.url("http://pad/bridge").unwrap().as_str(),
        "http://pad/bridge/api/streams"
    );
}

#[test]
fn test_serve_and_watch_have_no_call() {
    assert!(BridgeCall::from_command(&Commands::Serve(ServeArgs::default())).is_none());
    assert!(BridgeCall::from_command(&Commands::Watch { interval: 5 }).is_none());
}

#[test]
fn test_ws_url() {
    assert_eq!(ws_url(BASE).unwrap().as_str(), "ws://127.0.0.1:3333/ws");
    assert_eq!(
        ws_url("https://pad.example").unwrap().as_str(),
        "wss://pad.example/ws"
    );
    assert_eq!(ws_url("ws://pad:1").unwrap().as_str(), "ws://pad:1/ws");
    assert!(ws_url("ftp://pad").is_err());
    assert!(ws_url("not a url").is_err());
}

#[test]
fn test_render_discord_error_frame() {
    let frame = r#"{"type":"discord_error","error":"No page matching 'discord.com' is open","timestamp":"2026-01-01T00:00:00.000Z"}"#;
    assert_eq!(
        render_frame(frame),
        "[2026-01-01T00:00:00.000Z] disconnected: No page matching 'discord.com' is open"
    );
}

#[test]
fn test_render_status_frame_is_pretty_json() {
    let frame = r#"{"type":"stream_status","data":{"currentIndex":0},"timestamp":"t"}"#;
    let rendered = render_frame(frame);
    assert!(rendered.contains("\"stream_status\""));
    assert!(rendered.contains('\n'));
}

#[test]
fn test_render_non_json_frame_verbatim() {
    assert_eq!(render_frame("hello"), "hello");
}

#[tokio::test]
async fn test_send_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/streams/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .mount(&server)
        .await;

    let client = BridgeClient::new(server.uri()).unwrap();
    let call = BridgeCall::from_command(&Commands::Next).unwrap();
    let reply = client.send(&call).await.unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.body["success"], true);
}

#[tokio::test]
async fn test_send_keeps_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "status": "disconnected",
            "message": "target not reachable"
        })))
        .mount(&server)
        .await;

    let client = BridgeClient::new(server.uri()).unwrap();
    let call = BridgeCall::from_command(&Commands::Status).unwrap();
    let reply = client.send(&call).await.unwrap();
    assert!(!reply.is_success());
    assert_eq!(reply.status, 503);
    assert_eq!(reply.body["status"], "disconnected");
}

#[tokio::test]
async fn test_run_command_fails_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stream-deck/button/40"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Button number must be between 1 and 32"
        })))
        .mount(&server)
        .await;

    let result = run_command(&server.uri(), &Commands::Button { number: 40 }).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_send_unreachable_bridge() {
    let client = BridgeClient::new("http://127.0.0.1:1").unwrap();
    let call = BridgeCall::from_command(&Commands::Status).unwrap();
    let err = client.send(&call).await.unwrap_err();
    assert!(err.to_string().contains("not reachable"));
}
