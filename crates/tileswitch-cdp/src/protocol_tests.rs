use super::*;

#[test]
fn test_cdp_request_serialize_without_session() {
    let req = CdpRequest {
        id: 1,
        method: "Target.attachToTarget".to_string(),
        params: Some(serde_json::json!({"targetId": "T1", "flatten": true})),
        session_id: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["method"], "Target.attachToTarget");
    assert_eq!(json["params"]["flatten"], true);
    assert!(json.get("sessionId").is_none());
}

#[test]
fn test_cdp_request_serialize_with_session() {
    let req = CdpRequest {
        id: 7,
        method: "Runtime.enable".to_string(),
        params: None,
        session_id: Some("S1".to_string()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["sessionId"], "S1");
    assert!(json.get("params").is_none());
}

#[test]
fn test_cdp_response_error_deserialize() {
    let json = r#"{"id": 3, "error": {"code": -32000, "message": "No target with given id"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(3));
    let error = resp.error.unwrap();
    assert_eq!(error.code, -32000);
}

#[test]
fn test_cdp_event_deserialize() {
    let json = r#"{"method": "Runtime.executionContextCreated", "params": {}, "sessionId": "S1"}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert!(resp.id.is_none());
    assert_eq!(resp.method.as_deref(), Some("Runtime.executionContextCreated"));
}

#[test]
fn test_page_info_matches_filter() {
    let json = r#"{
        "id": "page123",
        "type": "page",
        "title": "Discord",
        "url": "https://discord.com/channels/1/2",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/page123"
    }"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert!(info.matches("discord.com"));
    assert!(!info.matches("slack.com"));
}

#[test]
fn test_service_worker_never_matches() {
    let info = PageInfo {
        id: "sw".into(),
        page_type: "service_worker".into(),
        title: String::new(),
        url: "https://discord.com/sw.js".into(),
        web_socket_debugger_url: None,
    };
    assert!(!info.matches("discord.com"));
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "Chrome/120.0",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.browser, "Chrome/120.0");
    assert!(version.web_socket_debugger_url.ends_with("/abc"));
}
