//! Property-based tests for rust_block_logger using proptest

use proptest::prelude::*;
use rust_block_logger::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Test that Severity string conversions roundtrip correctly
    #[test]
    fn test_severity_str_roundtrip(level in severity()) {
        let parsed: Severity = level.to_str().parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_severity_case_insensitive(level in severity(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.label().to_string()
        };

        let parsed: std::result::Result<Severity, String> = input.parse();
        assert_eq!(parsed, Ok(level));
    }

    /// Test that FromStr handles invalid input gracefully
    #[test]
    fn test_severity_invalid_parse(invalid_str in "[0-9 _-]{1,12}") {
        let result: std::result::Result<Severity, String> = invalid_str.parse();
        assert!(result.is_err(), "Expected parse error for '{}'", invalid_str);
    }

    /// Only Warning and Notice share a status badge
    #[test]
    fn test_status_text_distinct(a in severity(), b in severity()) {
        let aliases = matches!(
            (a, b),
            (Severity::Warning, Severity::Notice) | (Severity::Notice, Severity::Warning)
        );
        if a != b && !aliases {
            assert_ne!(a.emoji(), b.emoji());
        }
        assert!(a.status_text().ends_with(a.label()));
    }

    /// Test that Severity JSON serialization roundtrips
    #[test]
    fn test_severity_json_serialization(level in severity()) {
        let json_str = serde_json::to_string(&level).unwrap();
        let deserialized: Severity = serde_json::from_str(&json_str).unwrap();
        assert_eq!(deserialized, level);
    }
}

// ============================================================================
// Section Tests
// ============================================================================

proptest! {
    /// Equality does not depend on the order fields were added in
    #[test]
    fn test_section_equality_ignores_order(
        title in prop::option::of("[A-Za-z]{1,10}"),
        fields in prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,16}", 0..8)
    ) {
        let mut forward = Section::new(title.as_deref());
        for (name, value) in fields.iter() {
            forward.insert(name.as_str(), value);
        }

        let mut backward = Section::new(title.as_deref());
        for (name, value) in fields.iter().rev() {
            backward.insert(name.as_str(), value);
        }

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), fields.len());
    }

    /// Inserting an existing name overwrites the value in place
    #[test]
    fn test_section_insert_overwrites(name in "[a-z]{1,8}", first in "[a-z]{0,8}", second in "[a-z]{0,8}") {
        let section = Section::titled("T")
            .with_field(name.as_str(), &first)
            .with_field(name.as_str(), &second);

        assert_eq!(section.len(), 1);
        assert_eq!(section.get(&name), Some(second.as_str()));
    }

    /// Every rendered line is prefixed with the block marker and the right depth
    #[test]
    fn test_section_render_line_prefixes(
        title in prop::option::of("[A-Za-z]{1,10}"),
        fields in prop::collection::vec(("[a-z]{1,8}", "[ -~]{0,16}"), 0..6)
    ) {
        let mut section = Section::new(title.as_deref());
        for (name, value) in &fields {
            section.insert(name.as_str(), value);
        }

        let rendered = section.render();
        let field_prefix = if title.is_some() { "|\t\t" } else { "|\t" };

        for (idx, line) in rendered.lines().enumerate() {
            if title.is_some() && idx == 0 {
                assert_eq!(Some(&line[2..]), title.as_deref());
            } else {
                assert!(line.starts_with(field_prefix), "bad line {:?}", line);
                assert!(line.contains(": "));
            }
        }

        let expected_lines = section.len() + usize::from(title.is_some());
        assert_eq!(rendered.lines().count(), expected_lines);
    }
}

// ============================================================================
// Call Site and Block Tests
// ============================================================================

proptest! {
    /// The file name is the last path component
    #[test]
    fn test_file_name_is_basename(
        dirs in prop::collection::vec("[a-z]{1,6}", 0..4),
        base in "[A-Za-z]{1,10}\\.rs"
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&base);

        let site = CallSite::new(leak(path), "f", 1, 1);
        assert_eq!(site.file_name(), base.as_str());
    }

    /// Composing the same event twice yields the same block
    #[test]
    fn test_compose_is_idempotent(level in severity(), message in ".*", line in 1u32..10000u32) {
        let event = LogEvent::new(level, message, CallSite::new("src/lib.rs", "lib::f", line, 1));
        let formatter = EventFormatter::new();

        let first = formatter.compose(&event, &[]);
        let second = formatter.compose(&event, &[]);

        assert_eq!(&first, &second);
        assert!(first.starts_with("┌--- logger\n"));
        assert!(first.ends_with("└-------\n"));
    }

    /// Logging arbitrary text never panics and always yields one framed block
    #[test]
    fn test_logging_never_panics(level in severity(), messages in prop::collection::vec(".*", 0..10)) {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        for message in &messages {
            logger.event(level).log(|| message.as_str());
        }

        assert_eq!(sink.len(), messages.len());
        for record in sink.records() {
            assert_eq!(record.severity, level);
            assert!(record.text.starts_with("┌--- logger\n"));
            assert!(record.text.ends_with("└-------\n"));
        }
    }
}
