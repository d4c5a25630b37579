//! Infrastructure layer module
//!
//! This module contains the concrete plumbing behind the domain layer:
//! - Document loading (plain text and PDF)
//! - Configuration management
//! - Logging infrastructure
//! - YAML pipeline definitions
//! - Output validation

pub mod config;
pub mod document;
pub mod logging;
pub mod templates;
pub mod validators;
