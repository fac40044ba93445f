//! Declarative command-syntax parser for text consoles.
//!
//! This crate matches player or operator input like "go north" against
//! human-readable syntax patterns such as `go <string:direction>`, binds the
//! placeholder arguments, and runs the handler of the first command that fits.
//!
//! # Architecture
//!
//! ```text
//! "go   north\r\n"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INPUT           │  → ["go", "north"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TRANSFORMS      │  → ["go", "north"] (synonyms, stripped words, ...)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PROBE           │  → candidates: [go]  (match + bind, no handler)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXECUTE         │  → go handler({ env, args: { direction: "north" } })
//! └─────────────────┘
//!          │
//!          ▼
//!   ["Went", "north"]
//! ```
//!
//! # Modules
//!
//! - [`pattern`] - Syntax strings parsed into keywords and placeholders
//! - [`matcher`] - Positional pattern matching and wildcard tails
//! - [`validator`] - Validator results and the type-tag registry
//! - [`binder`] - Placeholder argument binding
//! - [`command`] - Commands, builders, handlers, and responses
//! - [`input`] - Input normalization and tokenization
//! - [`transform`] - Token transform pipeline
//! - [`registry`] - The [`Parser`]: registration and dispatch
//! - [`stdlib`] - Standard validators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod command;
pub mod input;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod stdlib;
pub mod transform;
pub mod validator;

// Re-export main types for convenience
pub use binder::{ArgumentBinder, Arguments, BindOutcome};
pub use command::{Command, CommandBuilder, Evaluation, Invocation, Mode, Response};
pub use matcher::{MatchOutcome, PatternMatcher};
pub use pattern::{Pattern, PatternToken, Placeholder};
pub use registry::Parser;
pub use validator::{Validation, ValidatorRegistry};
