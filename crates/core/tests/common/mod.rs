//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - Test fixtures (configurations, environment maps)
//! - Event assertions for the supervisor stream
//! - Scripted collaborators

pub mod assertions;
pub mod fixtures;
pub mod mock_agents;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_agents::*;
