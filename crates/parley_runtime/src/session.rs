//! Session state for the console.
//!
//! A [`Session`] owns the [`Parser`] and the tokio runtime that drives its
//! asynchronous handlers, so the synchronous REPL loop can submit one line
//! at a time.

use std::path::Path;

use parley_foundation::{Env, Error, Result, Value};
use parley_parser::{Parser, Response};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::{demo, snapshot};

/// Console session: a parser plus the runtime its handlers run on.
pub struct Session {
    parser: Parser,
    runtime: Runtime,
}

impl Session {
    /// Creates a session with the standard validators and the demo commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot be started.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new().with_standard_validators();
        demo::install(&mut parser)?;
        Self::with_parser(parser)
    }

    /// Creates a session around an already configured parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot be started.
    pub fn with_parser(parser: Parser) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| Error::internal(format!("failed to start runtime: {e}")))?;
        Ok(Self { parser, runtime })
    }

    /// Returns the parser.
    #[must_use]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Returns the parser mutably, for registering more commands.
    pub fn parser_mut(&mut self) -> &mut Parser {
        &mut self.parser
    }

    /// Returns the base env.
    #[must_use]
    pub fn env(&self) -> &Env {
        self.parser.env()
    }

    /// Sets a key in the base env.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.parser.set_env(key, value);
    }

    /// Every keyword the registered commands use, for completion.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        self.parser.keywords()
    }

    /// Parses one line of input against the base env and waits for the
    /// response.
    pub fn submit(&self, input: &str) -> Response {
        self.submit_scoped(input, &Env::new())
    }

    /// Parses one line with `scoped` overlaid on the base env.
    pub fn submit_scoped(&self, input: &str, scoped: &Env) -> Response {
        self.runtime.block_on(self.parser.parse_scoped(input, scoped))
    }

    /// Writes the base env to a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_env(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        snapshot::save_to_file(self.parser.env(), path)?;
        debug!(path = %path.display(), keys = self.parser.env().len(), "saved env");
        Ok(())
    }

    /// Replaces the base env with the contents of a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded; the current
    /// env is kept in that case.
    pub fn load_env(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let env = snapshot::load_from_file(path)?;
        debug!(path = %path.display(), keys = env.len(), "loaded env");
        self.parser.replace_env(env);
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}
