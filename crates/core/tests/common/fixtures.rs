//! Test fixtures for configurations and supervisor runs.

use oc_core::config::resolve_from;
use oc_protocol::{Configuration, SupervisorEvent};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Resolve a configuration from an in-memory environment.
#[allow(dead_code)]
pub fn config_from_env(vars: &[(&str, &str)]) -> Arc<Configuration> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    Arc::new(resolve_from(|key| env.get(key).cloned()))
}

/// Drain every event currently buffered in the channel.
#[allow(dead_code)]
pub fn drain_events(events_rx: &mut mpsc::Receiver<SupervisorEvent>) -> Vec<SupervisorEvent> {
    let mut events = Vec::new();
    while let Ok(event) = events_rx.try_recv() {
        events.push(event);
    }
    events
}
