use oc_protocol::*;
use std::time::Duration;

#[test]
fn test_agent_kind_serializes_as_name() {
    let json = serde_json::to_string(&AgentKind::Scout).expect("Failed to serialize AgentKind");
    assert_eq!(json, "\"scout\"");

    let kind: AgentKind =
        serde_json::from_str("\"WRITER\"").expect("Failed to deserialize AgentKind");
    assert_eq!(kind, AgentKind::Writer);

    let unknown: AgentKind =
        serde_json::from_str("\"admin\"").expect("Failed to deserialize AgentKind");
    assert_eq!(unknown, AgentKind::Unknown("admin".to_string()));
}

#[test]
fn test_configuration_serialization() {
    let config = Configuration {
        agent_kind: AgentKind::Butler,
        tenant_id: "acme".to_string(),
        customer_email: "ops@acme.test".to_string(),
        s3_bucket: "acme-docs".to_string(),
        log_format: LogFormat::Json,
        cycle_timeout: Some(Duration::from_secs(30)),
        ..Configuration::default()
    };

    let json = serde_json::to_value(&config).expect("Failed to serialize Configuration");
    assert_eq!(json["agent_kind"], "butler");
    assert_eq!(json["log_format"], "json");
    assert_eq!(json["db_name"], "openclaw");

    let deserialized: Configuration =
        serde_json::from_value(json).expect("Failed to deserialize Configuration");
    assert_eq!(deserialized, config);
}

#[test]
fn test_configuration_defaults_for_missing_optional_fields() {
    let json = r#"{
        "agent_kind": "scout",
        "tenant_id": "t1",
        "customer_email": "unknown",
        "db_host": "localhost",
        "db_name": "openclaw",
        "s3_bucket": ""
    }"#;

    let config: Configuration =
        serde_json::from_str(json).expect("Failed to deserialize Configuration");
    assert_eq!(config.agent_kind, AgentKind::Scout);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.cycle_timeout, None);
}

#[test]
fn test_supervisor_event_tagged_serialization() {
    let event = SupervisorEvent::Sleeping {
        state: WaitKind::Degraded,
        duration: BACKOFF_INTERVAL,
    };

    let json = serde_json::to_value(&event).expect("Failed to serialize SupervisorEvent");
    assert_eq!(json["type"], "sleeping");
    assert_eq!(json["payload"]["state"], "degraded");
    assert_eq!(json["payload"]["duration"]["secs"], 60);

    let deserialized: SupervisorEvent =
        serde_json::from_value(json).expect("Failed to deserialize SupervisorEvent");
    assert_eq!(deserialized, event);
}

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    assert_eq!(LogFormat::parse(" text "), Some(LogFormat::Text));
    assert_eq!(LogFormat::parse("xml"), None);
}
