//! Validators for produced task output.

pub mod output_validator;

pub use output_validator::OutputValidator;
