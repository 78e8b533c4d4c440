//! Agent factory for creating the process's agent from its configuration.

use crate::agents::adapters::{ButlerAgent, ScoutAgent, WriterAgent};
use crate::agents::base::Agent;
use crate::agents::collaborators::Collaborators;
use crate::config::error::{ConfigResult, ConfigurationError};
use oc_protocol::{AgentKind, Configuration};
use std::sync::Arc;

/// Factory for creating agent instances based on configuration.
///
/// The kind string was already normalized (trimmed, lower-cased) when the
/// configuration was resolved, so matching here is case-insensitive with
/// respect to the raw `AGENT_TYPE` value.
pub struct AgentFactory;

impl AgentFactory {
    /// Create an agent wired to the default, unconfigured collaborators.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when the agent kind is empty or unknown.
    /// Callers must treat this as fatal: retrying cannot help.
    ///
    /// # Examples
    ///
    /// ```
    /// use oc_core::agents::{Agent, AgentFactory};
    /// use oc_protocol::{AgentKind, Configuration};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let config = Arc::new(Configuration {
    ///     agent_kind: AgentKind::parse("Scout"),
    ///     ..Configuration::default()
    /// });
    ///
    /// let agent = AgentFactory::create(&config).unwrap();
    /// assert_eq!(agent.interval(), Duration::from_secs(600));
    /// ```
    pub fn create(config: &Arc<Configuration>) -> ConfigResult<Arc<dyn Agent>> {
        Self::create_with(config, Collaborators::default())
    }

    /// Create an agent using the supplied collaborator clients.
    pub fn create_with(
        config: &Arc<Configuration>,
        collaborators: Collaborators,
    ) -> ConfigResult<Arc<dyn Agent>> {
        match &config.agent_kind {
            AgentKind::Butler => Ok(Arc::new(ButlerAgent::new(
                Arc::clone(config),
                collaborators.mailbox,
            ))),
            AgentKind::Scout => Ok(Arc::new(ScoutAgent::new(
                Arc::clone(config),
                collaborators.signals,
            ))),
            AgentKind::Writer => Ok(Arc::new(WriterAgent::new(
                Arc::clone(config),
                collaborators.documents,
            ))),
            AgentKind::Unknown(raw) => Err(ConfigurationError::invalid_kind(raw)),
        }
    }
}
