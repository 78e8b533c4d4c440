//! Base Agent trait and supporting types.

use crate::agents::collaborators::CollaboratorError;
use async_trait::async_trait;
use oc_protocol::AgentKind;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single cycle. Always recoverable: the supervisor logs it,
/// backs off, and invokes the agent again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    #[error("Collaborator call failed: {0}")]
    Collaborator(#[from] CollaboratorError),
    #[error("Cycle exceeded its deadline of {0:?}")]
    TimedOut(Duration),
    #[error("Cycle failed: {0}")]
    Other(String),
}

/// A polling agent driven by the supervisor loop.
///
/// Implementations must not keep partial state between cycles: after a
/// failed `run_cycle` the supervisor calls it again without any cleanup.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Kind tag used for logging and events.
    fn kind(&self) -> AgentKind;

    /// Nominal wait between successful cycles.
    fn interval(&self) -> Duration;

    /// Called once before the first cycle.
    async fn start(&self) {}

    /// Perform one unit of polling work.
    async fn run_cycle(&self) -> Result<(), CycleError>;
}
