//! Pattern matching.
//!
//! Decides whether a single [`Pattern`] fits an input token sequence and, for
//! patterns with an open tail, folds the trailing tokens into one.

use tracing::trace;

use crate::pattern::{Pattern, PatternToken};

/// Result of matching one pattern against input tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern does not fit the input
    NoMatch,
    /// The pattern fits; holds the effective tokens to bind against
    Match(Vec<String>),
}

impl MatchOutcome {
    /// Returns true for [`MatchOutcome::Match`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Matches token sequences against syntax patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Tests `pattern` against `tokens`.
    ///
    /// Placeholders match any token; keywords must equal the token at the same
    /// position (lower-cased on both sides unless `case_sensitive`). Unless the
    /// pattern has an open tail, the input must have exactly as many tokens as
    /// the pattern.
    ///
    /// The caller's tokens are never modified. On a match, the returned
    /// effective tokens have the tail joined with single spaces at the last
    /// pattern position when the pattern's tail is open.
    #[must_use]
    pub fn matches(pattern: &Pattern, tokens: &[String], case_sensitive: bool) -> MatchOutcome {
        if !Self::keywords_match(pattern, tokens, case_sensitive) {
            trace!(pattern = pattern.source(), "keyword mismatch");
            return MatchOutcome::NoMatch;
        }

        if !pattern.has_open_tail() && pattern.len() != tokens.len() {
            trace!(
                pattern = pattern.source(),
                expected = pattern.len(),
                actual = tokens.len(),
                "length mismatch"
            );
            return MatchOutcome::NoMatch;
        }

        MatchOutcome::Match(Self::effective_tokens(pattern, tokens))
    }

    /// Scans every pattern position, comparing keywords to the input.
    ///
    /// A keyword at a position past the end of the input never matches.
    fn keywords_match(pattern: &Pattern, tokens: &[String], case_sensitive: bool) -> bool {
        pattern
            .tokens()
            .iter()
            .enumerate()
            .all(|(index, token)| match token {
                PatternToken::Placeholder(_) => true,
                PatternToken::Keyword(word) => tokens
                    .get(index)
                    .is_some_and(|input| keyword_eq(word, input, case_sensitive)),
            })
    }

    fn effective_tokens(pattern: &Pattern, tokens: &[String]) -> Vec<String> {
        let mut effective = tokens.to_vec();
        if !pattern.has_open_tail() {
            return effective;
        }

        let tail_index = pattern.len() - 1;
        if let Some(tail) = tokens.get(tail_index..) {
            effective.truncate(tail_index);
            effective.push(tail.join(" "));
        }
        effective
    }
}

fn keyword_eq(word: &str, input: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        word == input
    } else {
        word.to_lowercase() == input.to_lowercase()
    }
}
