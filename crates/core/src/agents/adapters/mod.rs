//! Agent implementations.

mod butler;
pub mod mock_agent;
mod scout;
mod writer;

pub use butler::ButlerAgent;
pub use mock_agent::{MockAgent, MockOutcome};
pub use scout::ScoutAgent;
pub use writer::WriterAgent;
