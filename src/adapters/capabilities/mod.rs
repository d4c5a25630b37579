//! Built-in capability implementations.

pub mod read_document;
pub mod search;

pub use read_document::ReadDocumentCapability;
pub use search::{SearchCapability, DEFAULT_FACTS, FALLBACK_FACT};
