//! Document ingestion: format detection and text extraction for `.txt` and
//! `.pdf` financial reports.

pub mod loader;

pub use loader::{page_marker, DocumentLoader};
