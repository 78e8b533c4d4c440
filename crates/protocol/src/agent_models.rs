//! Agent kind enumeration and polling intervals.
//!
//! Every OpenClaw process runs exactly one agent. The kind is selected by
//! the `AGENT_TYPE` environment variable and determines how long the
//! supervisor waits between successful cycles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Wait applied after a failed cycle, identical for every agent kind.
pub const BACKOFF_INTERVAL: Duration = Duration::from_secs(60);

pub const BUTLER_INTERVAL: Duration = Duration::from_secs(300);
pub const SCOUT_INTERVAL: Duration = Duration::from_secs(600);
pub const WRITER_INTERVAL: Duration = Duration::from_secs(60);

/// The kind of agent a process runs.
///
/// Serialized as its lower-case name, so `AgentKind::Butler` becomes
/// `"butler"` and an unrecognised value keeps its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentKind {
    /// Email and calendar ingestion.
    Butler,
    /// Buying-signal detection.
    Scout,
    /// Sales document generation.
    Writer,
    /// Anything else, including an empty value. Holds the normalized input.
    Unknown(String),
}

impl AgentKind {
    /// Names accepted by [`AgentKind::parse`], in display order.
    pub const VALID: [&'static str; 3] = ["butler", "scout", "writer"];

    /// Parse an agent kind, ignoring letter case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use oc_protocol::AgentKind;
    ///
    /// assert_eq!(AgentKind::parse("Butler"), AgentKind::Butler);
    /// assert_eq!(AgentKind::parse(" SCOUT "), AgentKind::Scout);
    /// assert_eq!(AgentKind::parse("admin"), AgentKind::Unknown("admin".to_string()));
    /// ```
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();

        match normalized.as_str() {
            "butler" => Self::Butler,
            "scout" => Self::Scout,
            "writer" => Self::Writer,
            _ => Self::Unknown(normalized),
        }
    }

    /// Lower-case name of the kind. For `Unknown` this is the raw value.
    pub fn name(&self) -> &str {
        match self {
            Self::Butler => "butler",
            Self::Scout => "scout",
            Self::Writer => "writer",
            Self::Unknown(raw) => raw,
        }
    }

    /// Normal wait between successful cycles, or `None` for `Unknown`.
    pub fn nominal_interval(&self) -> Option<Duration> {
        match self {
            Self::Butler => Some(BUTLER_INTERVAL),
            Self::Scout => Some(SCOUT_INTERVAL),
            Self::Writer => Some(WRITER_INTERVAL),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Default for AgentKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for AgentKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AgentKind> for String {
    fn from(kind: AgentKind) -> Self {
        kind.name().to_string()
    }
}
