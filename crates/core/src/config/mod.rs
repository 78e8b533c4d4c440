//! Configuration resolution.
//!
//! This module turns the process environment into an immutable
//! [`Configuration`](oc_protocol::Configuration) and defines the error raised
//! when that configuration cannot produce an agent.

pub mod error;
pub mod loader;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::{resolve, resolve_from};
