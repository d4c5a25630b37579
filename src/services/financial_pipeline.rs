//! Built-in financial document pipeline.
//!
//! Two agents (a document verifier and a senior financial analyst) and four
//! tasks run in order: verification, financial analysis, investment analysis
//! and risk assessment.

use std::sync::Arc;

use crate::domain::errors::ConfigResult;
use crate::domain::models::{
    Agent, PipelineConfig, Task, TaskKind, ToolStep, READ_DOCUMENT, SEARCH,
};

pub const VERIFIER_ROLE: &str = "Financial Document Verifier";
pub const ANALYST_ROLE: &str = "Senior Financial Analyst";

pub const VERIFICATION: &str = "verification";
pub const FINANCIAL_ANALYSIS: &str = "financial_analysis";
pub const INVESTMENT_ANALYSIS: &str = "investment_analysis";
pub const RISK_ASSESSMENT: &str = "risk_assessment";

/// Query used when the caller supplies none.
pub const DEFAULT_QUERY: &str = "Analyze this financial document";

pub fn verifier() -> Agent {
    Agent::new(
        VERIFIER_ROLE,
        "Verify the authenticity and completeness of financial documents",
        "A meticulous document verification specialist with deep knowledge of financial \
         reporting standards and document formats. Ensures uploaded documents are legitimate \
         financial reports by checking for standard elements like financial statements, proper \
         formatting and credible data sources, and spots fraudulent or incomplete documents.",
    )
    .with_capability(READ_DOCUMENT)
}

pub fn financial_analyst() -> Agent {
    Agent::new(
        ANALYST_ROLE,
        "Analyze financial documents and provide comprehensive investment insights and \
         recommendations",
        "A seasoned financial analyst with 15+ years of experience in corporate finance, \
         investment analysis and risk assessment. Reads financial statements, calculates key \
         ratios and provides data-driven investment recommendations with methodical precision \
         and evidence-based reasoning.",
    )
    .with_capability(READ_DOCUMENT)
    .with_capability(SEARCH)
}

fn verification(agent: Arc<Agent>) -> ConfigResult<Task> {
    Task::builder(VERIFICATION, agent)
        .kind(TaskKind::Verification)
        .description(
            "Verify whether the uploaded document is a legitimate financial document. Check for \
             standard financial reporting elements including financial statements, accounting \
             data, financial ratios and proper document structure. Identify document type and \
             credibility.",
        )
        .expect_sections([
            "Document type",
            "Verification status",
            "Key financial elements",
            "Completeness",
            "Confidence level",
        ])
        .grant(READ_DOCUMENT)
        .step(ToolStep::ReadDocument)
        .build()
}

fn financial_analysis(agent: Arc<Agent>) -> ConfigResult<Task> {
    Task::builder(FINANCIAL_ANALYSIS, agent)
        .description(
            "Analyze the provided financial document to extract key insights including revenue \
             trends, profitability metrics, cash flow analysis, debt levels and market risks. \
             Provide a comprehensive financial health assessment based on the document content. \
             Focus on quantitative data and factual analysis.",
        )
        .expect_sections([
            "Revenue and profit trends",
            "Key financial ratios",
            "Cash flow assessment",
            "Risks and opportunities",
            "Financial health summary",
        ])
        .grant(READ_DOCUMENT)
        .step(ToolStep::ReadDocument)
        .build()
}

fn investment_analysis(agent: Arc<Agent>) -> ConfigResult<Task> {
    Task::builder(INVESTMENT_ANALYSIS, agent)
        .description(
            "Based on the financial data extracted from the document, provide detailed \
             investment recommendations. Analyze financial ratios, growth potential, competitive \
             position and industry trends. Use search to gather current market context.",
        )
        .expect_sections([
            "Recommendation",
            "Supporting metrics",
            "Risk-adjusted return potential",
            "Market position",
            "Investment considerations",
            "Timeline",
        ])
        .grant(READ_DOCUMENT)
        .grant(SEARCH)
        .step(ToolStep::ReadDocument)
        .step(ToolStep::Search)
        .build()
}

fn risk_assessment(agent: Arc<Agent>) -> ConfigResult<Task> {
    Task::builder(RISK_ASSESSMENT, agent)
        .description(
            "Conduct a comprehensive risk assessment based on the financial document. Evaluate \
             liquidity risks, credit risks, market volatility exposure, operational risks and \
             regulatory concerns. Provide actionable risk mitigation strategies.",
        )
        .expect_sections([
            "Liquidity risk",
            "Credit risk",
            "Market and volatility risk",
            "Operational risk",
            "Regulatory and compliance risk",
            "Mitigation strategies",
            "Risk rating",
        ])
        .grant(READ_DOCUMENT)
        .grant(SEARCH)
        .step(ToolStep::ReadDocument)
        .step(ToolStep::Search)
        .build()
}

/// The full four-task pipeline.
pub fn financial_pipeline() -> ConfigResult<PipelineConfig> {
    let verifier = Arc::new(verifier());
    let analyst = Arc::new(financial_analyst());

    let tasks = vec![
        verification(verifier.clone())?,
        financial_analysis(analyst.clone())?,
        investment_analysis(analyst.clone())?,
        risk_assessment(analyst.clone())?,
    ];
    PipelineConfig::new(vec![verifier, analyst], tasks)
}

/// Only the verification task.
pub fn verification_pipeline() -> ConfigResult<PipelineConfig> {
    financial_pipeline()?.restricted_to(&[VERIFICATION])
}
