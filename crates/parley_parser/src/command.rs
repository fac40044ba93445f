//! Commands: syntax patterns plus a handler.
//!
//! A [`Command`] owns an ordered list of [`Pattern`]s and one asynchronous
//! handler. Patterns are tried in declaration order; the first one that
//! matches and binds wins. Commands are assembled with a [`CommandBuilder`]
//! and are immutable once built.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parley_foundation::{Env, Error, Result, Value};
use tracing::{trace, warn};

use crate::binder::{ArgumentBinder, Arguments, BindOutcome};
use crate::matcher::{MatchOutcome, PatternMatcher};
use crate::pattern::Pattern;
use crate::validator::ValidatorRegistry;

/// Output of a handler: an ordered list of lines.
///
/// A single string becomes a one-line response; sequences are kept in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    lines: Vec<String>,
}

impl Response {
    /// Creates an empty response.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The response lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the response, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&str> for Response {
    fn from(line: &str) -> Self {
        Self {
            lines: vec![line.to_string()],
        }
    }
}

impl From<String> for Response {
    fn from(line: String) -> Self {
        Self { lines: vec![line] }
    }
}

impl From<Vec<String>> for Response {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl From<Vec<&str>> for Response {
    fn from(lines: Vec<&str>) -> Self {
        lines.into_iter().map(String::from).collect()
    }
}

impl From<Value> for Response {
    fn from(value: Value) -> Self {
        match value {
            Value::Vec(items) => items.iter().map(ToString::to_string).collect(),
            other => Self::from(other.to_string()),
        }
    }
}

impl FromIterator<String> for Response {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// What a handler receives: the call's env and the bound arguments.
#[derive(Clone, Debug)]
pub struct Invocation {
    /// Base env overlaid with the call's scoped env
    pub env: Env,
    /// Arguments bound from the matched pattern
    pub args: Arguments,
}

/// Boxed future returned by a handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A command handler.
pub type Handler = Arc<dyn Fn(Invocation) -> HandlerFuture + Send + Sync>;

/// Whether an evaluation may run the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Report whether the input would trigger the command; never run the handler
    Probe,
    /// Run the handler of the first pattern that binds
    Execute,
}

/// Result of evaluating a command against input tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// No pattern matched and bound
    NoMatch,
    /// A pattern matched and bound (probe mode only)
    Matched,
    /// A validator rejected with this user-facing message
    Message(String),
    /// The handler ran and produced this response (execute mode only)
    Executed(Response),
}

impl Evaluation {
    /// Returns true unless this is [`Evaluation::NoMatch`].
    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Converts to the response shown to the user, if any.
    ///
    /// A validator message becomes a one-line response.
    #[must_use]
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Message(message) => Some(Response::from(message)),
            Self::Executed(response) => Some(response),
            Self::NoMatch | Self::Matched => None,
        }
    }
}

enum Resolution {
    NoMatch,
    Rejected(String),
    Bound(Arguments),
}

/// A named command: syntax patterns plus a handler.
#[derive(Clone)]
pub struct Command {
    name: String,
    patterns: Vec<Pattern>,
    case_sensitive: bool,
    handler: Handler,
}

impl Command {
    /// Starts building a command with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CommandBuilder {
        CommandBuilder::new(name)
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The syntax patterns, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// True if keywords are compared case-sensitively.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Reports whether `tokens` would trigger this command, without running
    /// the handler.
    ///
    /// Returns [`Evaluation::Matched`], [`Evaluation::Message`], or
    /// [`Evaluation::NoMatch`]. The caller's tokens are never modified.
    #[must_use]
    pub fn probe(&self, validators: &ValidatorRegistry, env: &Env, tokens: &[String]) -> Evaluation {
        match self.resolve(validators, env, tokens) {
            Resolution::NoMatch => Evaluation::NoMatch,
            Resolution::Rejected(message) => Evaluation::Message(message),
            Resolution::Bound(_) => Evaluation::Matched,
        }
    }

    /// Runs the handler for the first pattern that matches and binds.
    ///
    /// Returns [`Evaluation::Executed`], [`Evaluation::Message`], or
    /// [`Evaluation::NoMatch`].
    pub async fn execute(
        &self,
        validators: &ValidatorRegistry,
        env: &Env,
        tokens: &[String],
    ) -> Evaluation {
        match self.resolve(validators, env, tokens) {
            Resolution::NoMatch => Evaluation::NoMatch,
            Resolution::Rejected(message) => Evaluation::Message(message),
            Resolution::Bound(args) => {
                trace!(command = %self.name, "invoking handler");
                let invocation = Invocation {
                    env: env.clone(),
                    args,
                };
                Evaluation::Executed((self.handler)(invocation).await)
            }
        }
    }

    /// Evaluates in the given mode; see [`Command::probe`] and
    /// [`Command::execute`].
    pub async fn evaluate(
        &self,
        validators: &ValidatorRegistry,
        env: &Env,
        tokens: &[String],
        mode: Mode,
    ) -> Evaluation {
        match mode {
            Mode::Probe => self.probe(validators, env, tokens),
            Mode::Execute => self.execute(validators, env, tokens).await,
        }
    }

    fn resolve(&self, validators: &ValidatorRegistry, env: &Env, tokens: &[String]) -> Resolution {
        for pattern in &self.patterns {
            let MatchOutcome::Match(effective) =
                PatternMatcher::matches(pattern, tokens, self.case_sensitive)
            else {
                continue;
            };

            match ArgumentBinder::bind(pattern, &effective, validators, env) {
                BindOutcome::Bound(args) => {
                    trace!(command = %self.name, pattern = pattern.source(), "pattern bound");
                    return Resolution::Bound(args);
                }
                BindOutcome::Rejected(message) => return Resolution::Rejected(message),
                BindOutcome::Incomplete(_) => {
                    trace!(command = %self.name, pattern = pattern.source(), "binding incomplete");
                }
            }
        }
        Resolution::NoMatch
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("patterns", &self.patterns)
            .field("case_sensitive", &self.case_sensitive)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Command`].
pub struct CommandBuilder {
    name: String,
    syntax: Vec<String>,
    case_sensitive: bool,
    handler: Option<Handler>,
}

impl CommandBuilder {
    /// Creates a builder with no syntax and no handler.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            syntax: Vec::new(),
            case_sensitive: false,
            handler: None,
        }
    }

    /// Sets the syntax patterns, replacing any set before.
    #[must_use]
    pub fn syntax<I, S>(mut self, syntaxes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.syntax = syntaxes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the syntax patterns to every prefix followed by a space and
    /// `suffix`.
    ///
    /// `(["zoop1", "zoop2"], "suffix")` yields `zoop1 suffix` and
    /// `zoop2 suffix`. An empty suffix leaves the prefixes as they are.
    #[must_use]
    pub fn syntax_with_suffix<I, S>(self, prefixes: I, suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if suffix.is_empty() {
            return self.syntax(prefixes);
        }
        self.syntax(
            prefixes
                .into_iter()
                .map(|prefix| format!("{} {suffix}", prefix.into())),
        )
    }

    /// Sets whether keywords are compared case-sensitively (default: false).
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the asynchronous handler.
    ///
    /// The handler's output may be anything convertible into a
    /// [`Response`]: a string, a sequence of strings, or a [`Value`].
    #[must_use]
    pub fn handler<F, Fut, R>(mut self, handler: F) -> Self
    where
        F: Fn(Invocation) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Into<Response> + Send + 'static,
    {
        self.handler = Some(Arc::new(move |invocation: Invocation| -> HandlerFuture {
            let fut = handler(invocation);
            Box::pin(async move { fut.await.into() })
        }));
        self
    }

    /// Builds the command.
    ///
    /// # Errors
    ///
    /// Returns an error if any syntax string is not a valid pattern or if no
    /// handler was set.
    pub fn build(self) -> Result<Command> {
        let patterns = self
            .syntax
            .iter()
            .map(String::as_str)
            .map(Pattern::parse)
            .collect::<Result<Vec<_>>>()?;

        let handler = self
            .handler
            .ok_or_else(|| Error::missing_handler(&self.name))?;

        if patterns.is_empty() {
            warn!(command = %self.name, "command has no syntax and will never match");
        }

        Ok(Command {
            name: self.name,
            patterns,
            case_sensitive: self.case_sensitive,
            handler,
        })
    }
}

impl fmt::Debug for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBuilder")
            .field("name", &self.name)
            .field("syntax", &self.syntax)
            .field("case_sensitive", &self.case_sensitive)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
