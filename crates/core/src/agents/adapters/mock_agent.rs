//! Mock agent implementation for testing.

use crate::agents::base::{Agent, CycleError};
use async_trait::async_trait;
use oc_protocol::AgentKind;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// What a scripted cycle does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    Succeed,
    Fail(String),
    Panic(String),
    /// Never returns; only a cycle deadline gets the loop past it.
    Hang,
}

/// Agent whose cycles follow a script, keyed by 1-based cycle number.
///
/// Cycles without an entry use the default outcome. Every invocation is
/// counted and its start time recorded on the tokio clock, so tests running
/// with a paused clock can measure the exact waits between cycles.
pub struct MockAgent {
    kind: AgentKind,
    interval: Duration,
    default: MockOutcome,
    script: HashMap<u64, MockOutcome>,
    calls: AtomicU64,
    started: Mutex<Vec<Instant>>,
}

impl MockAgent {
    pub fn new(kind: AgentKind, interval: Duration, default: MockOutcome) -> Self {
        Self {
            kind,
            interval,
            default,
            script: HashMap::new(),
            calls: AtomicU64::new(0),
            started: Mutex::new(Vec::new()),
        }
    }

    /// Always succeeds, with the nominal interval of `kind`.
    pub fn success(kind: AgentKind) -> Self {
        let interval = kind.nominal_interval().unwrap_or(Duration::from_secs(1));
        Self::new(kind, interval, MockOutcome::Succeed)
    }

    /// Always fails.
    pub fn failing(kind: AgentKind) -> Self {
        let interval = kind.nominal_interval().unwrap_or(Duration::from_secs(1));
        Self::new(kind, interval, MockOutcome::Fail("Mock failure".to_string()))
    }

    /// Override the outcome of one cycle.
    pub fn on_cycle(mut self, cycle: u64, outcome: MockOutcome) -> Self {
        self.script.insert(cycle, outcome);
        self
    }

    /// Number of `run_cycle` invocations so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Tokio-clock instants at which each cycle started.
    pub fn started_at(&self) -> Vec<Instant> {
        self.started
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn kind(&self) -> AgentKind {
        self.kind.clone()
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run_cycle(&self) -> Result<(), CycleError> {
        let cycle = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.started
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Instant::now());

        match self.script.get(&cycle).unwrap_or(&self.default) {
            MockOutcome::Succeed => Ok(()),
            MockOutcome::Fail(message) => Err(CycleError::Other(message.clone())),
            MockOutcome::Panic(message) => panic!("{}", message),
            MockOutcome::Hang => std::future::pending().await,
        }
    }
}
