//! Offline reasoning backend.
//!
//! Produces a sectioned outline from the tool outputs without any model
//! call. Output is a pure function of the request, which makes CLI dry runs
//! reproducible.

use async_trait::async_trait;

use crate::domain::errors::ReasoningError;
use crate::domain::models::ReasoningRequest;
use crate::domain::ports::ReasoningEngine;

const EXCERPT_CHARS: usize = 240;

/// Deterministic outline writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineReasoner;

impl OutlineReasoner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReasoningEngine for OutlineReasoner {
    fn name(&self) -> &'static str {
        "outline"
    }

    async fn generate(&self, request: &ReasoningRequest) -> Result<String, ReasoningError> {
        Ok(render_outline(request))
    }
}

fn render_outline(request: &ReasoningRequest) -> String {
    let mut out = format!("# {} | {}\n\n", request.role, request.task);

    let query = if request.query.trim().is_empty() {
        "general analysis"
    } else {
        request.query.trim()
    };
    out.push_str(&format!("Query: {query}\n"));

    if request.low_confidence {
        out.push_str(&format!("Confidence: low ({})\n", request.warnings.join("; ")));
    } else {
        out.push_str("Confidence: normal\n");
    }
    if request.degraded_context {
        out.push_str("Upstream context: degraded\n");
    }

    out.push_str("\n## Evidence\n");
    for tool in &request.tool_outputs {
        out.push_str(&format!(
            "- {} ({} chars): {}\n",
            tool.capability,
            tool.text.chars().count(),
            excerpt(&tool.text)
        ));
    }
    for prior in &request.prior_outputs {
        out.push_str(&format!(
            "- prior task {} [{}]: {}\n",
            prior.task,
            prior.status,
            excerpt(&prior.text)
        ));
    }

    for section in &request.expected_output {
        out.push_str(&format!("\n## {section}\n"));
        out.push_str("Pending review against the evidence above.\n");
    }

    out
}

/// First characters of `text` on a single line.
fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PriorOutput, TaskStatus, ToolOutput};

    fn request() -> ReasoningRequest {
        ReasoningRequest {
            task: "risk_assessment".to_string(),
            role: "Senior Financial Analyst".to_string(),
            goal: "Assess risk".to_string(),
            backstory: String::new(),
            description: "Assess risks".to_string(),
            expected_output: vec!["Liquidity risk analysis".to_string(), "Risk score".to_string()],
            query: String::new(),
            tool_outputs: vec![ToolOutput {
                capability: "read_financial_document".to_string(),
                text: "Cash   and\nequivalents: $36.8B".to_string(),
            }],
            prior_outputs: vec![PriorOutput {
                task: "investment_analysis".to_string(),
                status: TaskStatus::Success,
                text: "Hold".to_string(),
            }],
            warnings: vec![],
            low_confidence: false,
            degraded_context: false,
        }
    }

    #[tokio::test]
    async fn test_outline_contains_every_section() {
        let text = OutlineReasoner::new().generate(&request()).await.unwrap();
        assert!(text.starts_with("# Senior Financial Analyst | risk_assessment"));
        assert!(text.contains("Query: general analysis"));
        assert!(text.contains("## Liquidity risk analysis"));
        assert!(text.contains("## Risk score"));
        assert!(text.contains("Cash and equivalents: $36.8B"));
        assert!(text.contains("prior task investment_analysis [success]: Hold"));
    }

    #[tokio::test]
    async fn test_outline_flags_low_confidence_and_degraded() {
        let mut req = request();
        req.low_confidence = true;
        req.warnings = vec!["empty document".to_string()];
        req.degraded_context = true;

        let text = OutlineReasoner::new().generate(&req).await.unwrap();
        assert!(text.contains("Confidence: low (empty document)"));
        assert!(text.contains("Upstream context: degraded"));
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "x".repeat(EXCERPT_CHARS + 10);
        assert!(excerpt(&long).ends_with("..."));
        assert_eq!(excerpt(&long).chars().count(), EXCERPT_CHARS + 3);
    }
}
