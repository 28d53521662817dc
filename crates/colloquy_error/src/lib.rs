//! Error types for the Colloquy conversation client.
//!
//! Every error carries the file and line where it was created, captured
//! through `#[track_caller]`, so a printed diagnostic points back at the
//! call site without a backtrace.

mod client;
mod config;

pub use client::{ClientError, ClientErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
