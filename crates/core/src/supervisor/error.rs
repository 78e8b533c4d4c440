//! Errors that end the supervisor loop.

use oc_protocol::AgentKind;
use thiserror::Error;

/// A failure that escaped `run_cycle` as something other than a
/// [`CycleError`](crate::agents::CycleError). The process should log it and
/// exit with a nonzero status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FatalLoopError {
    #[error("{agent} agent panicked in cycle {cycle}: {message}")]
    Panicked {
        agent: AgentKind,
        cycle: u64,
        message: String,
    },

    #[error("{agent} agent cycle {cycle} was aborted by the runtime: {message}")]
    Aborted {
        agent: AgentKind,
        cycle: u64,
        message: String,
    },
}
