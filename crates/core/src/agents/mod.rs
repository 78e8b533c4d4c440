//! Agent abstraction and construction.
//!
//! This module provides the `Agent` trait, the three production variants
//! (Butler, Scout, Writer), the collaborator interfaces they call, and the
//! `AgentFactory` that picks a variant from the configuration.

pub mod adapters;
pub mod base;
pub mod collaborators;
pub mod factory;

pub use adapters::{ButlerAgent, MockAgent, MockOutcome, ScoutAgent, WriterAgent};
pub use base::{Agent, CycleError};
pub use collaborators::{
    CollaboratorError, Collaborators, DocumentPipeline, MailboxClient, SignalFeed, Unconfigured,
};
pub use factory::AgentFactory;
