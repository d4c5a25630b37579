//! Reasoning collaborator implementations.

pub mod command;
pub mod mock;
pub mod outline;

pub use command::{CommandReasoner, CommandReasonerConfig};
pub use mock::MockReasoner;
pub use outline::OutlineReasoner;
