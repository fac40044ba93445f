//! Syntax patterns.
//!
//! A syntax string such as `go <string:direction>` is split on single spaces
//! into [`PatternToken`]s. Tokens starting with `<` are placeholders that bind
//! an argument; everything else is a keyword compared against the input.

use std::fmt;

use parley_foundation::{Error, Result};

/// Suffix marking a wildcard placeholder that swallows the rest of the input.
pub const WILDCARD_SUFFIX: &str = "*>";

/// A placeholder token: `<type>`, `<type:name>`, or either with a `*` before
/// the closing bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    raw: String,
    type_tag: String,
    name: String,
    qualified: bool,
    wildcard: bool,
}

impl Placeholder {
    fn parse(raw: &str) -> Self {
        // Drop the first and last characters, whatever they are.
        let mut chars = raw.get(1..).unwrap_or_default().chars();
        chars.next_back();
        let inner = chars.as_str();

        let wildcard = raw.ends_with(WILDCARD_SUFFIX);
        let inner = if wildcard {
            inner.strip_suffix('*').unwrap_or(inner)
        } else {
            inner
        };

        let mut parts = inner.split(':');
        let type_tag = parts.next().unwrap_or_default().to_string();
        let explicit_name = parts.next();
        let name = match explicit_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => type_tag.clone(),
        };

        Self {
            raw: raw.to_string(),
            type_tag,
            name,
            qualified: explicit_name.is_some(),
            wildcard,
        }
    }

    /// The placeholder text as written in the syntax string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The type tag selecting a validator or primitive check.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The argument name (defaults to the type tag).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the placeholder was written with a `:` qualifier.
    #[must_use]
    pub const fn is_qualified(&self) -> bool {
        self.qualified
    }

    /// True if the placeholder captures all remaining input tokens.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}

/// One element of a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternToken {
    /// A literal word that must appear in the input
    Keyword(String),
    /// An argument slot
    Placeholder(Placeholder),
}

impl PatternToken {
    /// Classifies a single space-free piece of a syntax string.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.starts_with('<') {
            Self::Placeholder(Placeholder::parse(text))
        } else {
            Self::Keyword(text.to_string())
        }
    }

    /// The token text as written in the syntax string.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Keyword(word) => word,
            Self::Placeholder(placeholder) => placeholder.raw(),
        }
    }

    /// Returns the placeholder, if this token is one.
    #[must_use]
    pub const fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Placeholder(placeholder) => Some(placeholder),
            Self::Keyword(_) => None,
        }
    }
}

/// A parsed syntax string: a non-empty, ordered sequence of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Parses a syntax string by splitting it on single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](parley_foundation::ErrorKind::InvalidPattern)
    /// if a wildcard placeholder appears anywhere but in last position.
    pub fn parse(source: &str) -> Result<Self> {
        let tokens: Vec<PatternToken> = source.split(' ').map(PatternToken::parse).collect();

        let last = tokens.len() - 1;
        for (index, token) in tokens.iter().enumerate() {
            if index != last && token.as_placeholder().is_some_and(Placeholder::is_wildcard) {
                return Err(Error::invalid_pattern(
                    source,
                    format!("wildcard placeholder {} must be the last token", token.text()),
                ));
            }
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The syntax string this pattern was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern tokens, in order.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of tokens (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with [`Pattern::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if the last token's text ends in `*>`.
    ///
    /// This is a purely textual check: a keyword ending in `*>` counts too.
    #[must_use]
    pub fn has_open_tail(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.text().ends_with(WILDCARD_SUFFIX))
    }

    /// Iterates over the literal keywords of this pattern.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            PatternToken::Keyword(word) => Some(word.as_str()),
            PatternToken::Placeholder(_) => None,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
