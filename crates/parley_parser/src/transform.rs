//! Token transforms.
//!
//! Transforms rewrite the whole token sequence before any matching happens.
//! They run in registration order, each receiving the previous one's output.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parley_foundation::Env;

/// A token transform: `(tokens, env) -> tokens`.
pub type TokenTransform = Arc<dyn Fn(Vec<String>, &Env) -> Vec<String> + Send + Sync>;

/// An ordered pipeline of token transforms.
#[derive(Clone, Default)]
pub struct TransformPipeline {
    transforms: Vec<TokenTransform>,
}

impl TransformPipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform.
    pub fn push<F>(&mut self, transform: F)
    where
        F: Fn(Vec<String>, &Env) -> Vec<String> + Send + Sync + 'static,
    {
        self.transforms.push(Arc::new(transform));
    }

    /// Runs every transform in order.
    #[must_use]
    pub fn apply(&self, tokens: Vec<String>, env: &Env) -> Vec<String> {
        self.transforms
            .iter()
            .fold(tokens, |tokens, transform| transform(tokens, env))
    }

    /// Returns the number of transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("len", &self.transforms.len())
            .finish()
    }
}

/// Drops tokens equal (ignoring case) to any of `words`, e.g. articles.
///
/// A token sequence that would become empty is left as it was.
pub fn strip_words(
    words: &[&str],
) -> impl Fn(Vec<String>, &Env) -> Vec<String> + Send + Sync + use<> {
    let words: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    move |tokens: Vec<String>, _env: &Env| {
        let kept: Vec<String> = tokens
            .iter()
            .filter(|token| !words.contains(&token.to_lowercase()))
            .cloned()
            .collect();
        if kept.is_empty() { tokens } else { kept }
    }
}

/// Replaces whole tokens using a synonym table (matched ignoring case).
pub fn synonyms(
    pairs: &[(&str, &str)],
) -> impl Fn(Vec<String>, &Env) -> Vec<String> + Send + Sync + use<> {
    let table: HashMap<String, String> = pairs
        .iter()
        .map(|(word, replacement)| (word.to_lowercase(), (*replacement).to_string()))
        .collect();
    move |tokens: Vec<String>, _env: &Env| {
        tokens
            .into_iter()
            .map(|token| table.get(&token.to_lowercase()).cloned().unwrap_or(token))
            .collect()
    }
}
