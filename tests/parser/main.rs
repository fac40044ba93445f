//! Integration tests for the parley_parser crate.
//!
//! Tests for the command pipeline:
//! - Input normalization and tokenization
//! - Pattern matching
//! - Argument binding
//! - Full parse and dispatch

mod binding_tests;
mod parser_integration_tests;
mod syntax_matching_tests;
mod tokenizer_tests;
