//! Parley - command syntax matching
//!
//! This crate re-exports all layers of the Parley system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: parley_runtime    - Console, CLI, env snapshots
//! Layer 1: parley_parser     - Patterns, matching, binding, dispatch
//! Layer 0: parley_foundation - Core types (Value, Env, Error)
//! ```

pub use parley_foundation as foundation;
pub use parley_parser as parser;
pub use parley_runtime as runtime;
