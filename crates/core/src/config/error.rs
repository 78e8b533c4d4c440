//! Error types for configuration handling.
//!
//! Resolving the environment never fails; the only configuration error is
//! an agent kind the factory cannot build.

use oc_protocol::AgentKind;
use thiserror::Error;

/// Errors raised when a configuration cannot produce an agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `AGENT_TYPE` was unset or empty.
    #[error("Agent type is not set; expected one of: {}", .valid.join(", "))]
    MissingAgentKind { valid: Vec<String> },

    /// `AGENT_TYPE` named something other than a known agent.
    #[error("Unknown agent type '{value}'; expected one of: {}", .valid.join(", "))]
    UnknownAgentKind { value: String, valid: Vec<String> },
}

impl ConfigurationError {
    /// Build the error for a raw, unrecognised agent kind value.
    pub fn invalid_kind(value: &str) -> Self {
        let valid = AgentKind::VALID.iter().map(|name| name.to_string()).collect();

        if value.is_empty() {
            Self::MissingAgentKind { valid }
        } else {
            Self::UnknownAgentKind {
                value: value.to_string(),
                valid,
            }
        }
    }

    /// The offending value, empty when the agent kind was missing.
    pub fn value(&self) -> &str {
        match self {
            Self::MissingAgentKind { .. } => "",
            Self::UnknownAgentKind { value, .. } => value,
        }
    }
}

/// Type alias for Result with ConfigurationError.
pub type ConfigResult<T> = Result<T, ConfigurationError>;
