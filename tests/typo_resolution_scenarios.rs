#[cfg(test)]
mod tests {
    use std::io::Write;

    use mistype::error::MistypeError;
    use mistype::matcher::{difference_report, is_typo};
    use mistype::resolver::{Suggestion, check_pairs, closest, suggest};
    use mistype::source;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_correction_flow() {
        // 1. Classify the raw pair
        let verdict = is_typo("the", "teh");
        assert!(verdict.is_typo);
        assert_eq!(verdict.corrected.as_deref(), Some("the"));

        // 2. Inspect the differences
        let report = difference_report("the", "teh");
        assert_eq!(report.count(), 2);
        assert_eq!(report.pairs, vec![('h', 'e'), ('e', 'h')]);

        // 3. Resolve against a dictionary
        let dictionary = vec!["hello".to_string(), "world".to_string(), "the".to_string()];
        let suggestions = suggest("teh", &dictionary);
        assert_eq!(suggestions, vec![Suggestion::new("the".to_string(), 2)]);
        assert_eq!(closest("teh", &dictionary).unwrap(), "the");
    }

    #[test]
    fn test_bulk_pair_checking() {
        let pairs = [
            ("hello", "hlelo"),
            ("hello", "world"),
            ("hello", "hallo"),
            ("haha", "hah"),
        ];

        let (flags, corrections) = check_pairs(&pairs);

        assert_eq!(flags, vec![true, false, true, true]);
        assert_eq!(
            corrections,
            vec![
                Some("hello".to_string()),
                None,
                Some("hello".to_string()),
                Some("haha".to_string()),
            ]
        );
        assert_eq!(flags.len(), corrections.len());
    }

    #[test]
    fn test_growing_dictionary_keeps_order() {
        let mut dictionary = vec!["hello".to_string(), "world".to_string(), "the".to_string()];
        assert_eq!(
            suggest("teh", &dictionary),
            vec![Suggestion::new("the".to_string(), 2)]
        );

        dictionary.push("eth".to_string());
        assert_eq!(
            suggest("teh", &dictionary),
            vec![
                Suggestion::new("the".to_string(), 2),
                Suggestion::new("eth".to_string(), 2),
            ]
        );

        // Tie on distance resolves through the leading-run heuristic.
        assert_eq!(closest("teh", &dictionary).unwrap(), "the");
    }

    #[test]
    fn test_file_backed_dictionary_matches_in_memory() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello world").unwrap();
        writeln!(temp_file, "the\teth").unwrap();
        temp_file.flush().unwrap();

        let words = source::read_words(temp_file.path()).unwrap();
        let from_memory = suggest("teh", &words);
        let from_file = source::suggest_from_file("teh", temp_file.path()).unwrap();
        assert_eq!(from_memory, from_file);

        assert_eq!(
            source::closest_from_file("teh", temp_file.path()).unwrap(),
            closest("teh", &words).unwrap()
        );
    }

    #[test]
    fn test_error_paths() {
        // Unreadable source is surfaced, not swallowed.
        let err = source::suggest_from_file("teh", "/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, MistypeError::SourceUnavailable(_)));

        // Closest-match resolution with no qualifying entry fails
        // explicitly instead of indexing an empty collection.
        let dictionary = vec!["unrelated".to_string()];
        let err = closest("zzz", &dictionary).unwrap_err();
        assert!(matches!(err, MistypeError::EmptyResult(_)));
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let dictionary = vec!["Hello".to_string()];
        let suggestions = suggest("HLELO", &dictionary);

        // Matching is case-folded, but the suggestion carries the
        // dictionary entry verbatim and the distance is computed on
        // the raw strings.
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "Hello");
        assert_eq!(
            suggestions[0].distance,
            difference_report("Hello", "HLELO").count()
        );
    }
}
