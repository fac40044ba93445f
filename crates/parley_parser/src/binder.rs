//! Argument binding.
//!
//! Walks the placeholders of a matched pattern and binds each one to the
//! input token at the same position, running the validator registered for
//! the placeholder's type when there is one.

use std::collections::HashMap;

use parley_foundation::{Env, Value};
use tracing::trace;

use crate::pattern::{Pattern, Placeholder};
use crate::validator::{Validation, ValidatorRegistry};

/// Arguments bound by a successful match (argument name -> value).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    values: HashMap<String, Value>,
}

impl Arguments {
    /// Creates an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value to an argument name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Gets the value bound to a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Gets a string argument.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Gets an integer argument.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Returns true if the name is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of bound arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// Result of binding a pattern's placeholders.
#[derive(Clone, Debug, PartialEq)]
pub enum BindOutcome {
    /// Every placeholder bound
    Bound(Arguments),
    /// At least one placeholder failed silently; holds what did bind
    Incomplete(Arguments),
    /// A validator rejected with a user-facing message
    Rejected(String),
}

/// Binds placeholder arguments for a matched pattern.
pub struct ArgumentBinder;

impl ArgumentBinder {
    /// Binds every placeholder in `pattern` against `tokens` position by position.
    ///
    /// `tokens` are the effective tokens produced by the matcher. A silent
    /// failure leaves that argument unbound and keeps scanning; a rejection
    /// with a message stops immediately.
    #[must_use]
    pub fn bind(
        pattern: &Pattern,
        tokens: &[String],
        validators: &ValidatorRegistry,
        env: &Env,
    ) -> BindOutcome {
        let mut args = Arguments::new();
        let mut complete = true;

        for (index, token) in pattern.tokens().iter().enumerate() {
            let Some(placeholder) = token.as_placeholder() else {
                continue;
            };

            let Some(input) = tokens.get(index) else {
                trace!(placeholder = placeholder.raw(), "no input token at position");
                complete = false;
                continue;
            };

            match Self::bind_one(placeholder, input, validators, env) {
                Step::Bound(value) => args.insert(placeholder.name(), value),
                Step::Skipped => complete = false,
                Step::Abort(message) => return BindOutcome::Rejected(message),
            }
        }

        if complete {
            BindOutcome::Bound(args)
        } else {
            BindOutcome::Incomplete(args)
        }
    }

    fn bind_one(
        placeholder: &Placeholder,
        input: &str,
        validators: &ValidatorRegistry,
        env: &Env,
    ) -> Step {
        if let Some(validator) = validators.get(placeholder.type_tag()) {
            return match validator(input, env) {
                Validation::Accept { value } => {
                    Step::Bound(value.unwrap_or_else(|| Value::from(input)))
                }
                Validation::Reject { message: Some(message) } => {
                    trace!(placeholder = placeholder.raw(), input, %message, "rejected");
                    Step::Abort(message)
                }
                Validation::Reject { message: None } => {
                    trace!(placeholder = placeholder.raw(), input, "rejected silently");
                    Step::Skipped
                }
            };
        }

        // Without a validator, a bare placeholder binds anything; a qualified
        // one binds only if the token's runtime type tag equals its type.
        // Tokens are always strings, so only `string` can pass here.
        let token = Value::from(input);
        if !placeholder.is_qualified() || token.value_type().tag() == placeholder.type_tag() {
            Step::Bound(token)
        } else {
            trace!(
                placeholder = placeholder.raw(),
                actual = %token.value_type(),
                "type tag mismatch"
            );
            Step::Skipped
        }
    }
}

enum Step {
    Bound(Value),
    Skipped,
    Abort(String),
}
