use finsight::adapters::capabilities::{SearchCapability, DEFAULT_FACTS, FALLBACK_FACT};
use finsight::infrastructure::document::DocumentLoader;
use finsight::LoadError;
use proptest::prelude::*;

proptest! {
    /// Property: search is a pure function of the query
    #[test]
    fn prop_search_is_deterministic(query in ".{0,80}") {
        let search = SearchCapability::new();
        prop_assert_eq!(search.search(&query), search.search(&query));
    }

    /// Property: queries without any keyword get the fallback
    #[test]
    fn prop_unmatched_queries_fall_back(query in "[0-9 ]{0,40}") {
        prop_assert_eq!(SearchCapability::new().search(&query), FALLBACK_FACT);
    }

    /// Property: keyword matching ignores case and surrounding text
    #[test]
    fn prop_keyword_matches_case_insensitively(
        index in 0usize..DEFAULT_FACTS.len(),
        prefix in "[0-9 ]{0,10}",
        suffix in "[0-9 ]{0,10}",
        upper in any::<bool>(),
    ) {
        let (keyword, fact) = DEFAULT_FACTS[index];
        let keyword = if upper { keyword.to_uppercase() } else { keyword.to_string() };
        let query = format!("{prefix}{keyword}{suffix}");
        prop_assert_eq!(SearchCapability::new().search(&query), fact);
    }

    /// Property: a query holding several keywords resolves to the earliest
    /// keyword in table order
    #[test]
    fn prop_first_keyword_in_table_order_wins(a in 0usize..DEFAULT_FACTS.len(), b in 0usize..DEFAULT_FACTS.len()) {
        let query = format!("{} and {}", DEFAULT_FACTS[a].0, DEFAULT_FACTS[b].0);
        let search = SearchCapability::new();
        let winner = DEFAULT_FACTS.iter().find(|(k, _)| query.contains(k)).map(|(_, f)| *f);
        let result = search.search(&query);
        prop_assert_eq!(Some(result.as_str()), winner);
    }

    /// Property: any extension other than txt or pdf is unsupported, for
    /// files that exist
    #[test]
    fn prop_unknown_extensions_are_unsupported(ext in "[a-z]{1,5}") {
        prop_assume!(ext != "txt" && ext != "pdf");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("report.{ext}"));
        std::fs::write(&path, "Revenue").unwrap();

        let err = DocumentLoader::new().load(&path).unwrap_err();
        prop_assert_eq!(err, LoadError::UnsupportedFormat(format!(".{ext}")));
    }

    /// Property: missing files are reported as not found whatever their extension
    #[test]
    fn prop_missing_files_are_not_found(ext in "(txt|pdf|TXT|docx|[a-z]{1,4})") {
        let dir = tempfile::tempdir().unwrap();
        let err = DocumentLoader::new().load(dir.path().join(format!("gone.{ext}"))).unwrap_err();
        prop_assert!(matches!(err, LoadError::NotFound(_)));
    }
}

#[test]
fn test_search_examples() {
    let search = SearchCapability::new();
    assert_eq!(search.search("What about TESLA outlook?"), DEFAULT_FACTS[3].1);
    assert_eq!(search.search("banana"), FALLBACK_FACT);
    assert_eq!(search.search(""), FALLBACK_FACT);
}
