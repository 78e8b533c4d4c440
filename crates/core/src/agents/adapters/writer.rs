//! Writer agent: sales document generation.

use crate::agents::base::{Agent, CycleError};
use crate::agents::collaborators::DocumentPipeline;
use async_trait::async_trait;
use oc_protocol::{AgentKind, Configuration, WRITER_INTERVAL};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Picks up pending document tasks every minute.
pub struct WriterAgent {
    config: Arc<Configuration>,
    documents: Arc<dyn DocumentPipeline>,
}

impl WriterAgent {
    pub fn new(config: Arc<Configuration>, documents: Arc<dyn DocumentPipeline>) -> Self {
        Self { config, documents }
    }
}

#[async_trait]
impl Agent for WriterAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Writer
    }

    fn interval(&self) -> Duration {
        WRITER_INTERVAL
    }

    async fn start(&self) {
        info!(
            tenant_id = %self.config.tenant_id,
            "Writer agent started for {}",
            self.config.tenant_id
        );
        if self.config.s3_bucket.is_empty() {
            warn!("S3_BUCKET is empty; generated documents have nowhere to go");
        }
        info!("Ready to generate sales documents");
    }

    async fn run_cycle(&self) -> Result<(), CycleError> {
        info!(tenant_id = %self.config.tenant_id, "Checking for document generation tasks");

        let produced = self
            .documents
            .process_pending(&self.config.tenant_id, &self.config.s3_bucket)
            .await?;

        info!(produced, bucket = %self.config.s3_bucket, "Document generation finished");
        Ok(())
    }
}
