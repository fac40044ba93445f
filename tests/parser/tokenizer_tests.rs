//! Tokenizer tests.

use parley_parser::input::{lex, normalize, tokenize};

#[test]
fn lex_simple_command() {
    assert_eq!(lex("go north"), vec!["go", "north"]);
}

#[test]
fn lex_collapses_spaces() {
    assert_eq!(lex("put   sword  in chest"), vec!["put", "sword", "in", "chest"]);
}

#[test]
fn lex_strips_one_trailing_newline() {
    assert_eq!(lex("look\n"), vec!["look"]);
}

#[test]
fn normalize_converts_every_crlf() {
    assert_eq!(normalize("a\r\nb\r\n"), "a\nb");
}

#[test]
fn tokenize_keeps_case() {
    assert_eq!(tokenize("Go NORTH"), vec!["Go", "NORTH"]);
}

#[test]
fn empty_input_is_one_empty_token() {
    assert_eq!(lex(""), vec![""]);
}
