//! Process configuration resolved from the environment.
//!
//! A `Configuration` is built once at startup and shared read-only by the
//! agent and the supervisor loop. Nothing in this crate reads the
//! environment; see `oc_core::config` for the resolver.

use crate::agent_models::AgentKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TENANT_ID: &str = "default";
pub const DEFAULT_CUSTOMER_EMAIL: &str = "unknown";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_NAME: &str = "openclaw";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse `text` or `json` (any case). Anything else yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Immutable configuration for one agent process.
///
/// # Example
///
/// ```
/// use oc_protocol::{AgentKind, Configuration};
///
/// let config = Configuration {
///     agent_kind: AgentKind::Writer,
///     ..Configuration::default()
/// };
/// assert_eq!(config.tenant_id, "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Which agent this process runs (`AGENT_TYPE`).
    pub agent_kind: AgentKind,

    /// Tenant the agent works for (`TENANT_ID`).
    pub tenant_id: String,

    /// Mailbox or contact the agent acts on behalf of (`CUSTOMER_EMAIL`).
    pub customer_email: String,

    /// Relational datastore host (`DB_HOST`).
    pub db_host: String,

    /// Relational datastore name (`DB_NAME`).
    pub db_name: String,

    /// Object storage bucket (`S3_BUCKET`). May be empty.
    pub s3_bucket: String,

    /// Log line format (`LOG_FORMAT`).
    #[serde(default)]
    pub log_format: LogFormat,

    /// Upper bound on a single cycle (`CYCLE_TIMEOUT_SECS`).
    ///
    /// `None` leaves cycles unbounded.
    #[serde(default)]
    pub cycle_timeout: Option<Duration>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            agent_kind: AgentKind::default(),
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            customer_email: DEFAULT_CUSTOMER_EMAIL.to_string(),
            db_host: DEFAULT_DB_HOST.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            s3_bucket: String::new(),
            log_format: LogFormat::Text,
            cycle_timeout: None,
        }
    }
}
