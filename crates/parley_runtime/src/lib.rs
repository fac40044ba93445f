//! Interactive console, CLI, and env snapshots for Parley.
//!
//! This crate provides:
//! - [`Repl`] - Interactive console driving a [`Parser`](parley_parser::Parser)
//! - [`Session`] - Parser plus the async runtime its handlers run on
//! - [`snapshot`] - Env persistence in `MessagePack`
//! - [`demo`] - A small command set to try things out

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod repl;
pub mod session;
pub mod snapshot;

use std::sync::Once;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl};
pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
