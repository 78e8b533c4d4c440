//! Scout agent: buying-signal detection.

use crate::agents::base::{Agent, CycleError};
use crate::agents::collaborators::SignalFeed;
use async_trait::async_trait;
use oc_protocol::{AgentKind, Configuration, SCOUT_INTERVAL};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Scans for hiring, fundraising and expansion signals every ten minutes.
pub struct ScoutAgent {
    config: Arc<Configuration>,
    feed: Arc<dyn SignalFeed>,
}

impl ScoutAgent {
    pub fn new(config: Arc<Configuration>, feed: Arc<dyn SignalFeed>) -> Self {
        Self { config, feed }
    }
}

#[async_trait]
impl Agent for ScoutAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Scout
    }

    fn interval(&self) -> Duration {
        SCOUT_INTERVAL
    }

    async fn start(&self) {
        info!(
            tenant_id = %self.config.tenant_id,
            "Scout agent started for {}",
            self.config.tenant_id
        );
        info!("Monitoring for buying signals");
    }

    async fn run_cycle(&self) -> Result<(), CycleError> {
        info!(tenant_id = %self.config.tenant_id, "Scanning for intent signals");

        let found = self.feed.scan(&self.config.tenant_id).await?;

        info!(found, "Signal scan finished");
        Ok(())
    }
}
