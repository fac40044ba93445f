//! Validators for placeholder types.
//!
//! A validator accepts, transforms, or rejects the raw input token bound to a
//! placeholder of its type tag.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parley_foundation::{Env, Value};

/// Outcome of validating one token.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    /// The token is acceptable
    Accept {
        /// Replacement value to bind; `None` binds the raw token
        value: Option<Value>,
    },
    /// The token is not acceptable
    Reject {
        /// User-facing message; `Some` aborts the whole command attempt
        message: Option<String>,
    },
}

impl Validation {
    /// Accepts the raw token unchanged.
    #[must_use]
    pub const fn accept() -> Self {
        Self::Accept { value: None }
    }

    /// Accepts the token, binding `value` in its place.
    #[must_use]
    pub fn accept_with(value: impl Into<Value>) -> Self {
        Self::Accept {
            value: Some(value.into()),
        }
    }

    /// Rejects silently so other patterns may still be tried.
    #[must_use]
    pub const fn reject() -> Self {
        Self::Reject { message: None }
    }

    /// Rejects with a message returned to the user as-is.
    #[must_use]
    pub fn reject_with(message: impl Into<String>) -> Self {
        Self::Reject {
            message: Some(message.into()),
        }
    }

    /// Returns true for [`Validation::Accept`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept { .. })
    }
}

/// A validator function: `(token, env) -> Validation`.
pub type ValidatorFn = Arc<dyn Fn(&str, &Env) -> Validation + Send + Sync>;

/// Validators keyed by placeholder type tag.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidatorFn>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a validator, replacing any previous one for the same tag.
    pub fn register<F>(&mut self, type_tag: impl Into<String>, validator: F)
    where
        F: Fn(&str, &Env) -> Validation + Send + Sync + 'static,
    {
        self.validators.insert(type_tag.into(), Arc::new(validator));
    }

    /// Looks up the validator for a type tag.
    #[must_use]
    pub fn get(&self, type_tag: &str) -> Option<&ValidatorFn> {
        self.validators.get(type_tag)
    }

    /// Returns true if a validator is registered for the tag.
    #[must_use]
    pub fn contains(&self, type_tag: &str) -> bool {
        self.validators.contains_key(type_tag)
    }

    /// Returns the number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns the registered type tags in sorted order.
    #[must_use]
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("type_tags", &self.type_tags())
            .finish()
    }
}
