//! Syntax matching tests.
//!
//! Pattern parsing and the matcher's keyword, length, and tail rules.

use parley_foundation::ErrorKind;
use parley_parser::input::lex;
use parley_parser::{MatchOutcome, Pattern, PatternMatcher, PatternToken};
use proptest::prelude::*;

fn matches(source: &str, input: &str) -> MatchOutcome {
    let pattern = Pattern::parse(source).unwrap();
    PatternMatcher::matches(&pattern, &lex(input), false)
}

#[test]
fn pattern_splits_keywords_and_placeholders() {
    let pattern = Pattern::parse("put <string:item> in <container>").unwrap();
    assert_eq!(pattern.len(), 4);
    assert!(matches!(pattern.tokens()[0], PatternToken::Keyword(ref w) if w == "put"));

    let item = pattern.tokens()[1].as_placeholder().unwrap();
    assert_eq!(item.type_tag(), "string");
    assert_eq!(item.name(), "item");

    let container = pattern.tokens()[3].as_placeholder().unwrap();
    assert_eq!(container.type_tag(), "container");
    assert_eq!(container.name(), "container");

    assert_eq!(pattern.keywords().collect::<Vec<_>>(), vec!["put", "in"]);
}

#[test]
fn wildcard_must_be_last() {
    let err = Pattern::parse("say <string:text*> loudly").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
}

#[test]
fn keyword_only_pattern() {
    assert!(matches("hello", "hello").is_match());
    assert!(matches("hello", "HELLO").is_match());
    assert!(!matches("hello", "goodbye").is_match());
}

#[test]
fn case_sensitive_keywords() {
    let pattern = Pattern::parse("hello").unwrap();
    assert!(!PatternMatcher::matches(&pattern, &lex("HELLO"), true).is_match());
    assert!(PatternMatcher::matches(&pattern, &lex("hello"), true).is_match());
}

#[test]
fn length_must_match_without_wildcard() {
    assert!(matches("go <string:direction>", "go north").is_match());
    assert!(!matches("go <string:direction>", "go north now").is_match());
    assert!(!matches("go <string:direction>", "go").is_match());
}

#[test]
fn wildcard_joins_tail() {
    assert_eq!(
        matches("say <string:text*>", "say hello there world"),
        MatchOutcome::Match(vec!["say".into(), "hello there world".into()])
    );
}

#[test]
fn wildcard_with_no_tail_binds_empty() {
    assert_eq!(
        matches("say <string:text*>", "say"),
        MatchOutcome::Match(vec!["say".into(), String::new()])
    );
}

#[test]
fn keyword_past_end_of_input_never_matches() {
    assert!(!matches("look at <string:thing*>", "look").is_match());
}

#[test]
fn matcher_leaves_input_alone() {
    let pattern = Pattern::parse("say <string:text*>").unwrap();
    let tokens = lex("say a b c");
    let _ = PatternMatcher::matches(&pattern, &tokens, false);
    assert_eq!(tokens, vec!["say", "a", "b", "c"]);
}

proptest! {
    #[test]
    fn fixed_patterns_never_match_other_lengths(extra in 1usize..6) {
        let input = std::iter::once("go")
            .chain(std::iter::repeat_n("x", 1 + extra))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert!(!matches("go <string:direction>", &input).is_match());
    }

    #[test]
    fn wildcard_tail_round_trips(words in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let input = format!("say {}", words.join(" "));
        let outcome = matches("say <string:text*>", &input);
        prop_assert_eq!(
            outcome,
            MatchOutcome::Match(vec!["say".to_string(), words.join(" ")])
        );
    }
}
