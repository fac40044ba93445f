//! Core values, environments, and errors for Parley.
//!
//! This crate provides:
//! - [`Value`] - Dynamic values bound to command arguments and env entries
//! - [`Type`] - Runtime type tags for values
//! - [`Env`] - Persistent key/value context with per-call overlays
//! - [`Error`] - Setup and runtime error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod env;
pub mod error;
pub mod types;
pub mod value;

pub use env::Env;
pub use error::{Error, ErrorKind};
pub use types::Type;
pub use value::Value;

/// Result type alias using the Parley error type.
pub type Result<T> = std::result::Result<T, Error>;
