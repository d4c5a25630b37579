//! Adapters implementing the domain ports.

pub mod capabilities;
pub mod reasoning;
