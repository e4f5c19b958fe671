//! Property-based tests for input parsing, autocompletion and grep.

use folioterm::commands::{autocomplete_command, parse_pipeline, split_args, CommandRegistry};
use folioterm::format::grep_filter;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_parse_pipeline_doesnt_panic(s in "\\PC*") {
        let _ = parse_pipeline(s.as_str());
        let _ = split_args(&s);
    }

    #[test]
    fn test_unquoted_input_splits_on_every_pipe(
        parts in prop::collection::vec("[a-z ]{0,12}", 1..6),
    ) {
        let line = parts.join("|");
        prop_assume!(!line.is_empty());

        let expected: Vec<String> = parts
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        prop_assert_eq!(parse_pipeline(line.as_str()), expected);
    }

    #[test]
    fn test_quoted_pipe_never_splits(
        before in "[a-z]{1,8}",
        inside in "[a-z |]{0,12}",
    ) {
        let line = format!("{before} '{inside}'");
        prop_assert_eq!(parse_pipeline(line.as_str()).len(), 1);

        let line = format!("{before} \"{inside}\"");
        prop_assert_eq!(parse_pipeline(line.as_str()).len(), 1);
    }

    #[test]
    fn test_segments_are_trimmed_and_non_empty(s in "[a-z |'\"]{1,40}") {
        prop_assume!(!s.trim().is_empty());
        for segment in parse_pipeline(s.as_str()) {
            prop_assert!(!segment.is_empty());
            prop_assert_eq!(segment.trim(), segment.as_str());
        }
    }

    #[test]
    fn test_autocomplete_results_match_prefix_in_order(prefix in "[a-zA-Z]{1,4}") {
        let registry = CommandRegistry::builtin();
        let names = registry.names();
        let matches = autocomplete_command(&prefix, names);
        let lower = prefix.to_lowercase();

        for name in &matches {
            prop_assert!(name.starts_with(&lower));
        }
        let expected: Vec<&str> = names
            .iter()
            .copied()
            .filter(|n| n.starts_with(&lower))
            .collect();
        prop_assert_eq!(matches, expected);
    }

    #[test]
    fn test_grep_keeps_order_and_only_matches(
        lines in prop::collection::vec("[a-zA-Z ]{0,10}", 0..10),
        pattern in "[a-z]{1,2}",
    ) {
        let text = lines.join("\n");
        let matches = grep_filter(text.as_str(), &pattern);

        let mut remaining = text.split('\n');
        for m in &matches {
            prop_assert!(m.to_lowercase().contains(&pattern));
            prop_assert!(remaining.any(|line| line == *m));
        }
    }
}
