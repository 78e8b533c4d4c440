//! Events emitted by the supervisor loop.
//!
//! The supervisor publishes one event per state transition on an optional
//! channel. Nothing depends on these being delivered; they exist so tests
//! and future telemetry can observe the loop without scraping logs.

use crate::agent_models::AgentKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why the supervisor is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaitKind {
    /// Previous cycle succeeded; waiting the nominal interval.
    Normal,
    /// Previous cycle failed; waiting the backoff interval.
    Degraded,
}

/// A state transition of the supervisor loop.
///
/// Serialized as a tagged enum:
/// ```json
/// { "type": "cycleFailed", "payload": { "agent": "scout", "cycle": 3, ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SupervisorEvent {
    /// The loop took ownership of the agent.
    Started { agent: AgentKind, tenant_id: String },

    /// `Waiting -> Running`.
    CycleStarted {
        agent: AgentKind,
        cycle: u64,
        at: DateTime<Utc>,
    },

    /// `Running -> Waiting(normal)`.
    CycleSucceeded { agent: AgentKind, cycle: u64 },

    /// `Running -> Waiting(degraded)`.
    CycleFailed {
        agent: AgentKind,
        cycle: u64,
        message: String,
        at: DateTime<Utc>,
    },

    /// The loop is about to sleep.
    Sleeping { state: WaitKind, duration: Duration },

    /// Graceful stop after a cancellation signal.
    Stopped { agent: AgentKind, cycles: u64 },

    /// A failure the loop cannot recover from.
    Fatal {
        agent: AgentKind,
        cycle: u64,
        message: String,
    },
}
