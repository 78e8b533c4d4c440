//! Scripted collaborators for driving the real agent variants.

use async_trait::async_trait;
use oc_core::agents::{CollaboratorError, DocumentPipeline, MailboxClient, SignalFeed};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Collaborator that fails on the listed 1-based call numbers and reports
/// one unit of work otherwise. Implements all three collaborator traits.
#[allow(dead_code)]
pub struct FlakyCollaborator {
    calls: AtomicU64,
    fail_on: HashSet<u64>,
    error: CollaboratorError,
}

impl FlakyCollaborator {
    #[allow(dead_code)]
    pub fn new(fail_on: &[u64], error: CollaboratorError) -> Self {
        Self {
            calls: AtomicU64::new(0),
            fail_on: fail_on.iter().copied().collect(),
            error,
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<usize, CollaboratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on.contains(&call) {
            Err(self.error.clone())
        } else {
            Ok(1)
        }
    }
}

#[async_trait]
impl MailboxClient for FlakyCollaborator {
    async fn sync_inbox(
        &self,
        _tenant_id: &str,
        _mailbox: &str,
    ) -> Result<usize, CollaboratorError> {
        self.next()
    }
}

#[async_trait]
impl SignalFeed for FlakyCollaborator {
    async fn scan(&self, _tenant_id: &str) -> Result<usize, CollaboratorError> {
        self.next()
    }
}

#[async_trait]
impl DocumentPipeline for FlakyCollaborator {
    async fn process_pending(
        &self,
        _tenant_id: &str,
        _bucket: &str,
    ) -> Result<usize, CollaboratorError> {
        self.next()
    }
}
