//! `openclaw` - runs one polling agent selected by `AGENT_TYPE`.
//!
//! All behavior is environment-driven; the only flags are `--help` and
//! `--version`. Exit status is 0 after a graceful shutdown and 1 for an
//! unknown agent type or a fatal loop error.

use clap::Parser;
use color_eyre::eyre::eyre;
use oc_core::agents::AgentFactory;
use oc_core::config;
use oc_core::logging;
use oc_core::supervisor::{Shutdown, Supervisor};
use oc_protocol::AgentKind;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "openclaw",
    version,
    about = "Run one OpenClaw polling agent",
    long_about = "Run one OpenClaw polling agent.\n\n\
        Configuration comes from the environment (or a .env file): AGENT_TYPE \
        (butler, scout or writer), TENANT_ID, CUSTOMER_EMAIL, DB_HOST, DB_NAME, \
        S3_BUCKET, LOG_FORMAT (text or json), CYCLE_TIMEOUT_SECS and RUST_LOG."
)]
struct Cli {}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Cli::parse();

    let dotenv = dotenvy::dotenv();
    let config = Arc::new(config::resolve());
    logging::init(config.log_format);

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Ignoring unreadable .env file");
        }
    }

    let run_id = Uuid::new_v4();
    info!("{}", "=".repeat(50));
    info!("OpenClaw Agent Starting");
    info!("Agent Type: {}", config.agent_kind);
    info!("Tenant ID: {}", config.tenant_id);
    info!("Run ID: {}", run_id);
    info!("{}", "=".repeat(50));

    let agent = match AgentFactory::create(&config) {
        Ok(agent) => agent,
        Err(e) => {
            error!("Unknown agent type: {}", config.agent_kind);
            error!("Expected: {}", AgentKind::VALID.join(", "));
            return Err(eyre!(e));
        }
    };

    let span = info_span!(
        "agent",
        run_id = %run_id,
        kind = %config.agent_kind,
        tenant_id = %config.tenant_id
    );

    let supervisor = Supervisor::new(agent)
        .with_tenant(config.tenant_id.clone())
        .with_cycle_timeout(config.cycle_timeout);
    match supervisor
        .run(Shutdown::from_signals())
        .instrument(span)
        .await
    {
        Ok(summary) => {
            info!(
                cycles = summary.cycles,
                failures = summary.failures,
                "Agent stopped by user"
            );
            Ok(())
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            Err(eyre!(e))
        }
    }
}
