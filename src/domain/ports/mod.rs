//! Port trait definitions (Hexagonal Architecture)
//!
//! - Capability: a named tool an agent may invoke (document reading, search)
//! - ReasoningEngine: the external collaborator that writes a task's text
//!
//! Adapters in `crate::adapters` implement these traits.

pub mod capability;
pub mod reasoning_engine;

pub use capability::Capability;
pub use reasoning_engine::ReasoningEngine;
