//! Supervisor loop driving a single agent.
//!
//! The supervisor owns the process's agent for its whole lifetime and runs
//! it as a two-state machine:
//!
//! ```text
//!            start / timer elapsed
//!   Waiting ----------------------> Running
//!      ^                               |
//!      |  Ok        -> nominal interval|
//!      +-------------------------------+
//!         CycleError -> backoff interval
//! ```
//!
//! The loop only leaves through a shutdown signal (graceful, `Stopped`) or a
//! [`FatalLoopError`] when a cycle panics. Shutdown is checked before every
//! cycle and raced against every sleep, never against a running cycle.

pub mod error;
pub mod shutdown;

pub use error::FatalLoopError;
pub use shutdown::{Shutdown, ShutdownHandle};

use crate::agents::base::{Agent, CycleError};
use chrono::Utc;
use oc_protocol::{SupervisorEvent, WaitKind, BACKOFF_INTERVAL, DEFAULT_TENANT_ID};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn, Instrument, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Waiting,
    Running,
    Stopped,
}

/// Totals reported after a graceful stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub failures: u64,
}

pub struct Supervisor {
    agent: Arc<dyn Agent>,
    tenant_id: String,
    events_tx: Option<mpsc::Sender<SupervisorEvent>>,
    cycle_timeout: Option<Duration>,
    state: watch::Sender<SupervisorState>,
}

impl Supervisor {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            events_tx: None,
            cycle_timeout: None,
            state: watch::Sender::new(SupervisorState::Waiting),
        }
    }

    /// Tenant reported in the `Started` event.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = tenant_id.into();
        self
    }

    /// Publish state transitions on `events_tx`.
    ///
    /// Delivery is best-effort: a full or closed channel drops the event and
    /// never stalls the loop.
    pub fn with_events(mut self, events_tx: mpsc::Sender<SupervisorEvent>) -> Self {
        self.events_tx = Some(events_tx);
        self
    }

    /// Bound each cycle. An elapsed deadline counts as a recoverable
    /// [`CycleError::TimedOut`]. `None` leaves cycles unbounded.
    ///
    /// The deadline aborts the cycle task, which only takes effect at its
    /// next `.await`. A cycle that blocks its worker thread keeps running
    /// there after the loop has moved on to the backoff.
    pub fn with_cycle_timeout(mut self, cycle_timeout: Option<Duration>) -> Self {
        self.cycle_timeout = cycle_timeout;
        self
    }

    pub fn state(&self) -> SupervisorState {
        *self.state.borrow()
    }

    /// Follow state transitions while `run` owns the supervisor.
    pub fn watch_state(&self) -> watch::Receiver<SupervisorState> {
        self.state.subscribe()
    }

    /// Run the agent until `shutdown` fires.
    ///
    /// # Errors
    ///
    /// Returns `FatalLoopError` if a cycle panics or its task is cancelled
    /// by the runtime. Ordinary cycle failures never end the loop.
    pub async fn run(self, mut shutdown: Shutdown) -> Result<RunSummary, FatalLoopError> {
        let kind = self.agent.kind();
        let mut summary = RunSummary {
            cycles: 0,
            failures: 0,
        };

        self.emit(SupervisorEvent::Started {
            agent: kind.clone(),
            tenant_id: self.tenant_id.clone(),
        });
        self.agent.start().await;

        while !shutdown.is_triggered() {
            summary.cycles += 1;
            let cycle = summary.cycles;

            self.state.send_replace(SupervisorState::Running);
            info!(agent = %kind, cycle, "Starting cycle");
            self.emit(SupervisorEvent::CycleStarted {
                agent: kind.clone(),
                cycle,
                at: Utc::now(),
            });

            let (wait_kind, wait) = match self.execute_cycle(cycle).await {
                Ok(Ok(())) => {
                    debug!(agent = %kind, cycle, "Cycle completed");
                    self.emit(SupervisorEvent::CycleSucceeded {
                        agent: kind.clone(),
                        cycle,
                    });
                    (WaitKind::Normal, self.agent.interval())
                }
                Ok(Err(e)) => {
                    summary.failures += 1;
                    let at = Utc::now();
                    warn!(
                        agent = %kind,
                        cycle,
                        error = %e,
                        at = %at.to_rfc3339(),
                        backoff_secs = BACKOFF_INTERVAL.as_secs(),
                        "Error in {} agent, backing off",
                        kind
                    );
                    self.emit(SupervisorEvent::CycleFailed {
                        agent: kind.clone(),
                        cycle,
                        message: e.to_string(),
                        at,
                    });
                    (WaitKind::Degraded, BACKOFF_INTERVAL)
                }
                Err(fatal) => {
                    self.state.send_replace(SupervisorState::Stopped);
                    error!(agent = %kind, cycle, error = %fatal, "Fatal error in supervisor loop");
                    self.emit(SupervisorEvent::Fatal {
                        agent: kind,
                        cycle,
                        message: fatal.to_string(),
                    });
                    return Err(fatal);
                }
            };

            self.state.send_replace(SupervisorState::Waiting);
            self.emit(SupervisorEvent::Sleeping {
                state: wait_kind,
                duration: wait,
            });

            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        self.state.send_replace(SupervisorState::Stopped);
        info!(
            agent = %kind,
            cycles = summary.cycles,
            failures = summary.failures,
            "Agent stopped by shutdown signal"
        );
        self.emit(SupervisorEvent::Stopped {
            agent: kind,
            cycles: summary.cycles,
        });

        Ok(summary)
    }

    /// Run one cycle on its own task so a panic surfaces as a `JoinError`
    /// instead of unwinding through the loop.
    async fn execute_cycle(&self, cycle: u64) -> Result<Result<(), CycleError>, FatalLoopError> {
        let agent = Arc::clone(&self.agent);
        let mut handle =
            tokio::spawn(async move { agent.run_cycle().await }.instrument(Span::current()));

        let joined = match self.cycle_timeout {
            None => (&mut handle).await,
            Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    handle.abort();
                    return Ok(Err(CycleError::TimedOut(limit)));
                }
            },
        };

        joined.map_err(|e| {
            let agent = self.agent.kind();
            if e.is_panic() {
                FatalLoopError::Panicked {
                    agent,
                    cycle,
                    message: panic_message(e.into_panic()),
                }
            } else {
                FatalLoopError::Aborted {
                    agent,
                    cycle,
                    message: e.to_string(),
                }
            }
        })
    }

    fn emit(&self, event: SupervisorEvent) {
        if let Some(tx) = &self.events_tx {
            let _ = tx.try_send(event);
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "non-string panic payload".to_string(),
        },
    }
}

impl std::fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Supervisor")
            .field("agent", &self.agent.kind())
            .field("cycle_timeout", &self.cycle_timeout)
            .field("tenant_id", &self.tenant_id)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{MockAgent, MockOutcome};
    use oc_protocol::AgentKind;

    #[test]
    fn test_new_supervisor_is_waiting() {
        let supervisor = Supervisor::new(Arc::new(MockAgent::success(AgentKind::Writer)));
        assert_eq!(supervisor.state(), SupervisorState::Waiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_and_tenant_are_published() {
        let agent = Arc::new(MockAgent::success(AgentKind::Butler).on_cycle(1, MockOutcome::Hang));
        let (handle, shutdown) = shutdown::channel();
        let (events_tx, mut events_rx) = mpsc::channel(64);

        let supervisor = Supervisor::new(agent)
            .with_tenant("acme")
            .with_events(events_tx)
            .with_cycle_timeout(Some(Duration::from_secs(5)));
        let mut state = supervisor.watch_state();
        let task = tokio::spawn(supervisor.run(shutdown));

        // Hung cycle holds Running until the deadline, then the backoff sleep holds Waiting
        state
            .wait_for(|s| *s == SupervisorState::Running)
            .await
            .unwrap();
        state
            .wait_for(|s| *s == SupervisorState::Waiting)
            .await
            .unwrap();

        handle.trigger();
        task.await.unwrap().unwrap();
        assert_eq!(*state.borrow(), SupervisorState::Stopped);

        assert_eq!(
            events_rx.recv().await,
            Some(SupervisorEvent::Started {
                agent: AgentKind::Butler,
                tenant_id: "acme".to_string(),
            })
        );
    }

    #[test]
    fn test_panic_message_variants() {
        assert_eq!(panic_message(Box::new("static")), "static");
        assert_eq!(panic_message(Box::new(String::from("owned"))), "owned");
        assert_eq!(panic_message(Box::new(7_u8)), "non-string panic payload");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pre_triggered_shutdown_runs_no_cycles() {
        let agent = Arc::new(MockAgent::success(AgentKind::Butler));
        let (handle, shutdown) = shutdown::channel();
        handle.trigger();

        let summary = Supervisor::new(agent.clone()).run(shutdown).await.unwrap();
        assert_eq!(summary, RunSummary { cycles: 0, failures: 0 });
        assert_eq!(agent.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_cycle_is_fatal() {
        let agent = Arc::new(
            MockAgent::success(AgentKind::Scout).on_cycle(2, MockOutcome::Panic("oom".to_string())),
        );
        let (_handle, shutdown) = shutdown::channel();

        let err = Supervisor::new(agent.clone()).run(shutdown).await.unwrap_err();
        assert_eq!(
            err,
            FatalLoopError::Panicked {
                agent: AgentKind::Scout,
                cycle: 2,
                message: "oom".to_string(),
            }
        );
        assert_eq!(agent.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_timeout_counts_as_failure() {
        let agent = Arc::new(MockAgent::success(AgentKind::Writer).on_cycle(1, MockOutcome::Hang));
        let (handle, shutdown) = shutdown::channel();
        let (events_tx, mut events_rx) = mpsc::channel(64);

        let task = tokio::spawn(
            Supervisor::new(agent.clone())
                .with_events(events_tx)
                .with_cycle_timeout(Some(Duration::from_secs(5)))
                .run(shutdown),
        );

        // Hung first cycle times out, second cycle succeeds
        while let Some(event) = events_rx.recv().await {
            if let SupervisorEvent::CycleSucceeded { cycle: 2, .. } = event {
                break;
            }
        }
        handle.trigger();

        let summary = task.await.unwrap().unwrap();
        assert_eq!(summary.failures, 1);

        let started = agent.started_at();
        assert_eq!(started[1] - started[0], Duration::from_secs(5) + BACKOFF_INTERVAL);
    }
}
