//! # oc-core
//!
//! Agent runtime for OpenClaw.
//!
//! This crate provides:
//! - Configuration resolution from the process environment
//! - The `Agent` trait with Butler, Scout and Writer implementations
//! - The factory that selects an agent by configured kind
//! - The supervisor loop that polls the agent with fixed backoff
//! - Structured logging setup
//!
//! ## Modules
//!
//! - [`config`]: Environment resolver and configuration errors
//! - [`agents`]: Agent trait, variants, collaborators and factory
//! - [`supervisor`]: Polling loop and shutdown signal
//! - [`logging`]: Global `tracing` subscriber

pub mod agents;
pub mod config;
pub mod logging;
pub mod supervisor;
