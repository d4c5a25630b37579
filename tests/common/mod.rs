//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use finsight::adapters::reasoning::MockReasoner;
use finsight::domain::models::{Agent, PipelineConfig, Task, TaskKind, ToolStep, READ_DOCUMENT, SEARCH};
use finsight::services::{CapabilityRegistry, SequentialOrchestrator};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a report file and return its path
pub fn write_report(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write report");
    path
}

/// Orchestrator over the default capabilities and a scripted reasoner
pub fn orchestrator(reasoner: &MockReasoner) -> SequentialOrchestrator {
    SequentialOrchestrator::new(
        Arc::new(CapabilityRegistry::with_defaults()),
        Arc::new(reasoner.clone()),
    )
}

/// A verification task followed by analysis tasks with the given names.
///
/// Every task reads the document; analysis tasks also search.
pub fn gated_pipeline(analyses: &[&str]) -> PipelineConfig {
    let verifier = Arc::new(Agent::new("Verifier", "Verify filings", "Careful").with_capability(READ_DOCUMENT));
    let analyst = Arc::new(
        Agent::new("Analyst", "Analyze filings", "Seasoned")
            .with_capability(READ_DOCUMENT)
            .with_capability(SEARCH),
    );

    let mut tasks = vec![Task::builder("verify", verifier.clone())
        .kind(TaskKind::Verification)
        .description("Verify the document. Identify its type.")
        .expect_section("Verification status")
        .grant(READ_DOCUMENT)
        .step(ToolStep::ReadDocument)
        .build()
        .expect("verification task")];

    for name in analyses {
        tasks.push(
            Task::builder(*name, analyst.clone())
                .description(format!("Run the {name} analysis."))
                .expect_sections(["Findings", "Recommendation"])
                .grant(READ_DOCUMENT)
                .grant(SEARCH)
                .step(ToolStep::ReadDocument)
                .step(ToolStep::Search)
                .build()
                .expect("analysis task"),
        );
    }

    PipelineConfig::new(vec![verifier, analyst], tasks).expect("valid pipeline")
}

/// Write a PDF whose pages carry the given text; `None` leaves a page blank
pub fn write_pdf(path: &Path, pages: &[Option<&str>]) {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = match text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).expect("page count");
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save pdf");
}
