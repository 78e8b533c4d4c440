//! Butler agent: email and calendar ingestion.

use crate::agents::base::{Agent, CycleError};
use crate::agents::collaborators::MailboxClient;
use async_trait::async_trait;
use oc_protocol::{AgentKind, Configuration, BUTLER_INTERVAL};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Polls the customer's mailbox every five minutes.
pub struct ButlerAgent {
    config: Arc<Configuration>,
    mailbox: Arc<dyn MailboxClient>,
}

impl ButlerAgent {
    /// Create a new Butler.
    ///
    /// # Arguments
    ///
    /// * `config` - The process configuration; `customer_email` names the mailbox
    /// * `mailbox` - Client for the mail/calendar provider
    pub fn new(config: Arc<Configuration>, mailbox: Arc<dyn MailboxClient>) -> Self {
        Self { config, mailbox }
    }
}

#[async_trait]
impl Agent for ButlerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Butler
    }

    fn interval(&self) -> Duration {
        BUTLER_INTERVAL
    }

    async fn start(&self) {
        info!(
            customer_email = %self.config.customer_email,
            "Butler agent started for {}",
            self.config.customer_email
        );
        info!("Monitoring mailbox for new emails");
    }

    async fn run_cycle(&self) -> Result<(), CycleError> {
        info!(tenant_id = %self.config.tenant_id, "Checking emails for {}", self.config.tenant_id);

        let ingested = self
            .mailbox
            .sync_inbox(&self.config.tenant_id, &self.config.customer_email)
            .await?;

        info!(ingested, "Mailbox sync finished");
        Ok(())
    }
}
