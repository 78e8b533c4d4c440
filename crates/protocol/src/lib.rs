//! # oc-protocol
//!
//! Shared data model for the OpenClaw agent runtime.
//!
//! This crate defines the plain data structures passed between the entry
//! point, the agent factory and the supervisor loop:
//! - The agent kind tag and its polling intervals
//! - The process configuration resolved once at startup
//! - Events emitted by the supervisor loop
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent kind enumeration and timing constants
//! - [`config_models`]: Process configuration record
//! - [`events`]: Supervisor observation events
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and chrono
//! - Independent compilation: No dependencies on other OpenClaw crates

pub mod agent_models;
pub mod config_models;
pub mod events;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use events::*;
