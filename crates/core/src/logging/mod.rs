//! Structured logging setup.
//!
//! One subscriber per process, installed by the entry point before anything
//! else logs. Output is line-oriented text or JSON on stderr.

use oc_protocol::LogFormat;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, writing to stderr.
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place and return `false`.
pub fn init(format: LogFormat) -> bool {
    set_global_default(subscriber(format, std::io::stderr)).is_ok()
}

/// Build the process subscriber against an arbitrary writer.
///
/// Every line carries an RFC 3339 UTC timestamp, the level, the target
/// (component) and the message. The filter comes from `RUST_LOG`.
pub fn subscriber<W>(format: LogFormat, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    build(format, writer, filter)
}

fn build<W>(format: LogFormat, writer: W, filter: EnvFilter) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_timer(ChronoUtc::rfc_3339())
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer);

    match format {
        LogFormat::Text => Box::new(Registry::default().with(filter).with(layer.with_ansi(false))),
        LogFormat::Json => Box::new(
            Registry::default()
                .with(filter)
                .with(layer.json().with_current_span(true).with_span_list(false)),
        ),
    }
}
