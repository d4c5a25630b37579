//! Output validation for task results
//!
//! Checks produced text against a task's expected-output sections. Missing
//! sections are reported, never fatal.

/// Validates produced text against expected section labels
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputValidator;

impl OutputValidator {
    /// Create a new output validator
    pub fn new() -> Self {
        Self
    }

    /// Strip a markdown code block wrapping the whole output
    ///
    /// Some reasoning backends wrap their answer in a fenced block even when
    /// the content is plain markdown. Handles:
    /// - ```markdown\n...\n```
    /// - ```\n...\n```
    pub fn strip_code_fence(output: &str) -> String {
        let trimmed = output.trim();

        if trimmed.len() >= 6 && trimmed.starts_with("```") && trimmed.ends_with("```") {
            let start = trimmed.find('\n').map_or(3, |pos| pos + 1);
            let end = trimmed.rfind("\n```").unwrap_or(trimmed.len() - 3);
            if start <= end {
                tracing::debug!(input_length = trimmed.len(), "stripped code fence from output");
                return trimmed[start..end].trim().to_string();
            }
        }

        output.to_string()
    }

    /// Expected sections whose label does not appear in `output`
    ///
    /// Matching is case-insensitive substring matching, so a label may appear
    /// as a heading, a bullet or inline text.
    pub fn missing_sections(&self, output: &str, expected: &[String]) -> Vec<String> {
        let haystack = output.to_lowercase();
        expected
            .iter()
            .filter(|label| !haystack.contains(&label.to_lowercase()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_all_sections_present() {
        let output = "## Liquidity Risk Analysis\nok\n## Risk score\n7/10";
        let missing = OutputValidator::new()
            .missing_sections(output, &labels(&["Liquidity risk analysis", "Risk score"]));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_sections_keep_order() {
        let output = "## Timeline\n12 months";
        let missing = OutputValidator::new().missing_sections(
            output,
            &labels(&["Recommendation", "Timeline", "Market position"]),
        );
        assert_eq!(missing, labels(&["Recommendation", "Market position"]));
    }

    #[test]
    fn test_strip_code_fence() {
        let fenced = "```markdown\n## Summary\nSolid quarter\n```";
        assert_eq!(
            OutputValidator::strip_code_fence(fenced),
            "## Summary\nSolid quarter"
        );
    }

    #[test]
    fn test_unfenced_output_unchanged() {
        let plain = "## Summary\nSolid quarter";
        assert_eq!(OutputValidator::strip_code_fence(plain), plain);
        assert_eq!(OutputValidator::strip_code_fence("```"), "```");
    }
}
