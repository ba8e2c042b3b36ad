//! # CLI Layer
//!
//! This module is **one possible UI client** for the address book library.
//!
//! It is the only place that:
//! - Reads terminal input and writes to stdout/stderr
//! - Parses arguments and session commands
//! - Formats the list, editor and messages for humans
//!
//! ## Structure
//!
//! - `setup`: clap definitions for process arguments and session commands
//! - `commands`: context setup and the session loop
//! - `render`, `styles`, `templates`: outstanding-based output
//! - `logging`: tracing subscriber installation

mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
