//! Input normalization and tokenization.
//!
//! Raw console input is cleaned up before it is split into tokens: line
//! endings are normalized, one trailing newline is dropped, and runs of
//! spaces collapse to one. Tokens are then produced by splitting on single
//! spaces; there is no quoting or escaping.

/// Cleans raw input before tokenization.
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut cleaned = input.replace("\r\n", "\n");

    if cleaned.ends_with('\n') {
        cleaned.pop();
    }

    let mut collapsed = String::with_capacity(cleaned.len());
    let mut previous_space = false;
    for ch in cleaned.chars() {
        if ch == ' ' && previous_space {
            continue;
        }
        previous_space = ch == ' ';
        collapsed.push(ch);
    }
    collapsed
}

/// Splits cleaned input on single spaces.
///
/// Leading or trailing spaces produce empty tokens; an empty input produces
/// a single empty token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input.split(' ').map(String::from).collect()
}

/// Normalizes then tokenizes raw input.
#[must_use]
pub fn lex(input: &str) -> Vec<String> {
    tokenize(&normalize(input))
}
