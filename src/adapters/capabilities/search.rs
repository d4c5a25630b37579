//! Market-search capability over a small, ordered fact table.

use async_trait::async_trait;

use crate::domain::errors::CapabilityError;
use crate::domain::models::{CapabilityOutput, SEARCH};
use crate::domain::ports::Capability;

/// Returned when no keyword matches the query.
pub const FALLBACK_FACT: &str = "General market analysis suggests maintaining a diversified \
     portfolio with regular risk assessment and monitoring.";

/// Keyword to fact mapping, scanned in this order.
pub const DEFAULT_FACTS: &[(&str, &str)] = &[
    (
        "market trends",
        "Current market showing volatility due to inflation concerns and geopolitical tensions.",
    ),
    (
        "investment",
        "Diversified portfolio recommended with focus on defensive stocks and bonds.",
    ),
    (
        "risk",
        "Current risk factors include interest rate changes, supply chain disruptions, and regulatory changes.",
    ),
    (
        "tesla",
        "TSLA showing strong fundamentals with growing EV market share but facing increased competition.",
    ),
    (
        "financial ratios",
        "Key ratios to monitor include P/E ratio, debt-to-equity, current ratio, and ROE.",
    ),
];

/// Deterministic keyword search.
///
/// `search` is total: it never fails and never touches the network. The
/// first keyword (in table order) contained in the lower-cased query wins.
#[derive(Debug, Clone)]
pub struct SearchCapability {
    facts: Vec<(String, String)>,
}

impl Default for SearchCapability {
    fn default() -> Self {
        Self::with_facts(DEFAULT_FACTS.iter().copied())
    }
}

impl SearchCapability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a custom ordered table. Keywords are lower-cased.
    pub fn with_facts<I, K, V>(facts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            facts: facts
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Fact for the first matching keyword, or the fallback sentence.
    pub fn search(&self, query: &str) -> String {
        let query = query.to_lowercase();
        self.facts
            .iter()
            .find(|(keyword, _)| !keyword.is_empty() && query.contains(keyword.as_str()))
            .map_or_else(|| FALLBACK_FACT.to_string(), |(_, fact)| fact.clone())
    }

    /// Keyword that `query` matches, if any.
    pub fn matched_keyword(&self, query: &str) -> Option<&str> {
        let query = query.to_lowercase();
        self.facts
            .iter()
            .find(|(keyword, _)| !keyword.is_empty() && query.contains(keyword.as_str()))
            .map(|(keyword, _)| keyword.as_str())
    }
}

#[async_trait]
impl Capability for SearchCapability {
    fn name(&self) -> &str {
        SEARCH
    }

    fn description(&self) -> &str {
        "Search for financial and market information related to a query"
    }

    async fn invoke(&self, input: &str) -> Result<CapabilityOutput, CapabilityError> {
        Ok(CapabilityOutput::text(self.search(input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitively() {
        let search = SearchCapability::new();
        assert_eq!(
            search.search("What about TESLA outlook?"),
            DEFAULT_FACTS[3].1
        );
        assert_eq!(search.matched_keyword("What about TESLA outlook?"), Some("tesla"));
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        let search = SearchCapability::new();
        // "investment" precedes "tesla" in the table
        assert_eq!(
            search.search("Provide investment recommendation for Tesla"),
            DEFAULT_FACTS[1].1
        );
        // "risk" precedes "tesla"
        assert_eq!(search.matched_keyword("Assess financial risks for Tesla"), Some("risk"));
    }

    #[test]
    fn test_no_match_returns_fallback() {
        let search = SearchCapability::new();
        assert_eq!(search.search("banana"), FALLBACK_FACT);
        assert_eq!(search.search(""), FALLBACK_FACT);
        assert_eq!(search.matched_keyword("banana"), None);
    }

    #[test]
    fn test_custom_facts_are_lowercased() {
        let search = SearchCapability::with_facts([("EBITDA", "Margins expanding.")]);
        assert_eq!(search.search("ebitda trend"), "Margins expanding.");
    }

    #[tokio::test]
    async fn test_invoke_never_fails() {
        let output = SearchCapability::new().invoke("market trends today").await.unwrap();
        assert_eq!(output.text, DEFAULT_FACTS[0].1);
    }
}
