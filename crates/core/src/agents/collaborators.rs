//! Client interfaces for the external systems agents talk to.
//!
//! Each agent variant receives exactly one collaborator at construction
//! time. The integrations themselves (mail provider, signal source,
//! document generation backend) live outside this crate; until one is
//! supplied the factory wires [`Unconfigured`], which does nothing.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("service error: {0}")]
    Service(String),
}

/// Mail and calendar provider used by the Butler.
#[async_trait]
pub trait MailboxClient: Send + Sync {
    /// Ingest new messages for `mailbox` and persist them.
    ///
    /// Returns the number of messages ingested.
    async fn sync_inbox(&self, tenant_id: &str, mailbox: &str) -> Result<usize, CollaboratorError>;
}

/// Web or API source of buying signals used by the Scout.
#[async_trait]
pub trait SignalFeed: Send + Sync {
    /// Scan for new signals and persist them. Returns how many were found.
    async fn scan(&self, tenant_id: &str) -> Result<usize, CollaboratorError>;
}

/// Document store and generation backend used by the Writer.
#[async_trait]
pub trait DocumentPipeline: Send + Sync {
    /// Generate every pending document and store it in `bucket`.
    ///
    /// Returns the number of documents produced.
    async fn process_pending(&self, tenant_id: &str, bucket: &str)
        -> Result<usize, CollaboratorError>;
}

/// Placeholder collaborator that reports zero work.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

#[async_trait]
impl MailboxClient for Unconfigured {
    async fn sync_inbox(&self, tenant_id: &str, mailbox: &str) -> Result<usize, CollaboratorError> {
        tracing::debug!(tenant_id, mailbox, "No mailbox integration configured");
        Ok(0)
    }
}

#[async_trait]
impl SignalFeed for Unconfigured {
    async fn scan(&self, tenant_id: &str) -> Result<usize, CollaboratorError> {
        tracing::debug!(tenant_id, "No signal source configured");
        Ok(0)
    }
}

#[async_trait]
impl DocumentPipeline for Unconfigured {
    async fn process_pending(
        &self,
        tenant_id: &str,
        bucket: &str,
    ) -> Result<usize, CollaboratorError> {
        tracing::debug!(tenant_id, bucket, "No document backend configured");
        Ok(0)
    }
}

/// The set of clients handed to the factory.
///
/// Only the collaborator matching the selected agent kind is used.
#[derive(Clone)]
pub struct Collaborators {
    pub mailbox: Arc<dyn MailboxClient>,
    pub signals: Arc<dyn SignalFeed>,
    pub documents: Arc<dyn DocumentPipeline>,
}

impl Collaborators {
    pub fn with_mailbox(mut self, mailbox: Arc<dyn MailboxClient>) -> Self {
        self.mailbox = mailbox;
        self
    }

    pub fn with_signals(mut self, signals: Arc<dyn SignalFeed>) -> Self {
        self.signals = signals;
        self
    }

    pub fn with_documents(mut self, documents: Arc<dyn DocumentPipeline>) -> Self {
        self.documents = documents;
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            mailbox: Arc::new(Unconfigured),
            signals: Arc::new(Unconfigured),
            documents: Arc::new(Unconfigured),
        }
    }
}
