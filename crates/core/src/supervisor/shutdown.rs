//! Cancellation signal for the supervisor loop.

use tokio::sync::watch;
use tracing::{info, warn};

/// Create a connected shutdown handle and receiver.
pub fn channel() -> (ShutdownHandle, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownHandle { tx }, Shutdown { rx })
}

/// Sending side: triggers a graceful stop.
#[derive(Debug)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving side, owned by the supervisor.
///
/// Dropping the handle without triggering it does not count as a shutdown.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// Shutdown wired to process signals: Ctrl-C everywhere, SIGTERM on unix.
    ///
    /// The handlers are registered before this returns, so a signal that
    /// arrives while the first cycle is starting is still a graceful stop.
    /// Must be called from inside a tokio runtime.
    pub fn from_signals() -> Self {
        let (handle, shutdown) = channel();
        let signals = Signals::install();

        tokio::spawn(async move {
            signals.recv().await;
            info!("Shutdown signal received");
            handle.trigger();
        });

        shutdown
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been triggered.
    pub async fn wait(&mut self) {
        let result = self.rx.wait_for(|triggered| *triggered).await.map(|_| ());
        if result.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
struct Signals {
    interrupt: Option<tokio::signal::unix::Signal>,
    terminate: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl Signals {
    fn install() -> Self {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt())
            .map_err(|e| warn!(error = %e, "Failed to install SIGINT handler"))
            .ok();
        let terminate = signal(SignalKind::terminate())
            .map_err(|e| warn!(error = %e, "Failed to install SIGTERM handler"))
            .ok();
        Self {
            interrupt,
            terminate,
        }
    }

    async fn recv(mut self) {
        tokio::select! {
            _ = recv_or_pending(self.interrupt.as_mut()) => {}
            _ = recv_or_pending(self.terminate.as_mut()) => {}
        }
    }
}

#[cfg(unix)]
async fn recv_or_pending(signal: Option<&mut tokio::signal::unix::Signal>) {
    match signal {
        Some(signal) => {
            signal.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(not(unix))]
struct Signals;

#[cfg(not(unix))]
impl Signals {
    fn install() -> Self {
        Signals
    }

    async fn recv(self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
