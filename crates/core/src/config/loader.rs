//! Environment resolver for the process configuration.
//!
//! Every variable is optional. A missing value falls back to its documented
//! default, so resolving is total: there is no error path here. Agent kind
//! validation happens later, in the factory.

use oc_protocol::config_models::{
    Configuration, LogFormat, DEFAULT_CUSTOMER_EMAIL, DEFAULT_DB_HOST, DEFAULT_DB_NAME,
    DEFAULT_TENANT_ID,
};
use oc_protocol::AgentKind;
use std::time::Duration;

pub const AGENT_TYPE: &str = "AGENT_TYPE";
pub const TENANT_ID: &str = "TENANT_ID";
pub const CUSTOMER_EMAIL: &str = "CUSTOMER_EMAIL";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const S3_BUCKET: &str = "S3_BUCKET";
pub const LOG_FORMAT: &str = "LOG_FORMAT";
pub const CYCLE_TIMEOUT_SECS: &str = "CYCLE_TIMEOUT_SECS";

/// Resolve the configuration from the real process environment.
///
/// # Example
///
/// ```rust,no_run
/// use oc_core::config::loader::resolve;
///
/// let config = resolve();
/// println!("Running {} for tenant {}", config.agent_kind, config.tenant_id);
/// ```
pub fn resolve() -> Configuration {
    resolve_from(|key| std::env::var(key).ok())
}

/// Resolve the configuration through an arbitrary variable lookup.
///
/// Blank values of defaulted string fields count as unset.
///
/// # Example
///
/// ```
/// use oc_core::config::loader::resolve_from;
/// use oc_protocol::AgentKind;
///
/// let config = resolve_from(|key| match key {
///     "AGENT_TYPE" => Some("Scout".to_string()),
///     _ => None,
/// });
/// assert_eq!(config.agent_kind, AgentKind::Scout);
/// assert_eq!(config.tenant_id, "default");
/// ```
pub fn resolve_from<F>(lookup: F) -> Configuration
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let or_default =
        |key: &str, default: &str| non_blank(key).unwrap_or_else(|| default.to_string());

    Configuration {
        agent_kind: AgentKind::parse(&lookup(AGENT_TYPE).unwrap_or_default()),
        tenant_id: or_default(TENANT_ID, DEFAULT_TENANT_ID),
        customer_email: or_default(CUSTOMER_EMAIL, DEFAULT_CUSTOMER_EMAIL),
        db_host: or_default(DB_HOST, DEFAULT_DB_HOST),
        db_name: or_default(DB_NAME, DEFAULT_DB_NAME),
        s3_bucket: lookup(S3_BUCKET).unwrap_or_default(),
        log_format: non_blank(LOG_FORMAT)
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or_default(),
        cycle_timeout: non_blank(CYCLE_TIMEOUT_SECS).and_then(|value| parse_timeout(&value)),
    }
}

fn parse_timeout(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}
