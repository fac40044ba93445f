//! Command registry and dispatch.
//!
//! Orchestrates the full flow from raw input to a handler's response.

use std::collections::HashMap;

use parley_foundation::{Env, Error, Result, Value};
use tracing::debug;

use crate::command::{Command, CommandBuilder, Response};
use crate::input;
use crate::stdlib;
use crate::transform::TransformPipeline;
use crate::validator::{Validation, ValidatorRegistry};

/// Holds named commands, validators, token transforms, and the base env.
///
/// Registration happens through `&mut self` before parsing starts. Parsing
/// takes `&self`, so a `Parser` shared behind an `Arc` serves concurrent
/// parse calls; each call works on its own overlaid env and token vector.
/// Changing the base env needs exclusive access, which keeps writers from
/// racing in-flight parses.
#[derive(Debug, Default)]
pub struct Parser {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
    validators: ValidatorRegistry,
    transforms: TransformPipeline,
    env: Env,
}

impl Parser {
    /// Creates an empty parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the standard validators (see [`stdlib`]).
    #[must_use]
    pub fn with_standard_validators(mut self) -> Self {
        stdlib::register(&mut self.validators);
        self
    }

    /// Replaces the base env.
    #[must_use]
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Adds a built command.
    ///
    /// Commands are tried in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateCommand`](parley_foundation::ErrorKind::DuplicateCommand)
    /// if a command with the same name exists.
    pub fn add_command(&mut self, command: Command) -> Result<()> {
        if self.index.contains_key(command.name()) {
            return Err(Error::duplicate_command(command.name()));
        }
        debug!(command = command.name(), patterns = command.patterns().len(), "registered");
        self.index.insert(command.name().to_string(), self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Builds and adds a command.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder is incomplete or the name is taken.
    pub fn register(&mut self, builder: CommandBuilder) -> Result<()> {
        self.add_command(builder.build()?)
    }

    /// Registers a validator for a placeholder type tag.
    pub fn add_validator<F>(&mut self, type_tag: impl Into<String>, validator: F)
    where
        F: Fn(&str, &Env) -> Validation + Send + Sync + 'static,
    {
        self.validators.register(type_tag, validator);
    }

    /// Appends a token transform.
    pub fn add_transform<F>(&mut self, transform: F)
    where
        F: Fn(Vec<String>, &Env) -> Vec<String> + Send + Sync + 'static,
    {
        self.transforms.push(transform);
    }

    /// Sets a key in the base env.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.env.set(key, value);
    }

    /// Replaces the whole base env.
    pub fn replace_env(&mut self, env: Env) {
        self.env = env;
    }

    /// The base env.
    #[must_use]
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The registered validators.
    #[must_use]
    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// All commands, in registration order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Command names, in registration order.
    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(Command::name).collect()
    }

    /// Every distinct keyword across all patterns, sorted.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self
            .commands
            .iter()
            .flat_map(Command::patterns)
            .flat_map(|pattern| pattern.keywords())
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();
        keywords.sort_unstable();
        keywords.dedup();
        keywords
    }

    /// Normalizes, tokenizes, and transforms raw input.
    #[must_use]
    pub fn tokens(&self, raw: &str, env: &Env) -> Vec<String> {
        self.transforms.apply(input::lex(raw), env)
    }

    /// Commands that would fire for `tokens`, in registration order.
    ///
    /// Probing never runs a handler and never modifies `tokens`. A command
    /// whose validator rejects with a message counts as a candidate.
    #[must_use]
    pub fn candidates(&self, tokens: &[String], env: &Env) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|command| command.probe(&self.validators, env, tokens).is_match())
            .collect()
    }

    /// Parses input against the base env.
    pub async fn parse(&self, raw: &str) -> Response {
        self.parse_scoped(raw, &Env::new()).await
    }

    /// Parses input with `scoped` overlaid on the base env.
    ///
    /// Returns the response of the first candidate command that executes, a
    /// validator's message, or an empty response if nothing matches.
    #[tracing::instrument(level = "debug", skip(self, scoped))]
    pub async fn parse_scoped(&self, raw: &str, scoped: &Env) -> Response {
        let env = self.env.overlay(scoped);
        let tokens = self.tokens(raw, &env);
        self.dispatch(&tokens, &env).await
    }

    /// Dispatches already-tokenized input.
    ///
    /// The transform pipeline is not applied.
    pub async fn parse_tokens(&self, tokens: &[String], scoped: &Env) -> Response {
        let env = self.env.overlay(scoped);
        self.dispatch(tokens, &env).await
    }

    async fn dispatch(&self, tokens: &[String], env: &Env) -> Response {
        let candidates = self.candidates(tokens, env);
        debug!(
            candidates = ?candidates.iter().map(|c| c.name()).collect::<Vec<_>>(),
            "probed commands"
        );

        for command in candidates {
            let evaluation = command.execute(&self.validators, env, tokens).await;
            if let Some(response) = evaluation.into_response() {
                debug!(command = command.name(), lines = response.len(), "executed");
                return response;
            }
        }

        debug!("no command matched");
        Response::empty()
    }
}
