//! Capability port - interface for tools agents can invoke.

use async_trait::async_trait;

use crate::domain::errors::CapabilityError;
use crate::domain::models::CapabilityOutput;

/// A stateless, named, invocable tool.
///
/// Implementations are shared by reference across every agent that declares
/// them and across concurrent runs, so they must not hold per-call state.
/// Any external provider registered under a built-in name substitutes for
/// the built-in implementation.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Registry name of the capability.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str {
        ""
    }

    /// Run the capability on a single text input.
    async fn invoke(&self, input: &str) -> Result<CapabilityOutput, CapabilityError>;
}
