//! pipereel: parses one raw shell line into an executable pipeline.
//!
//! A line is split at `|` into subcommands; each subcommand is tokenized on
//! whitespace, its words classified (`<`, `>>`, `>`, filenames, normal
//! words), and folded into a [`Subcommand`] carrying an argument vector plus
//! optional input/output redirection and mode. Only those three redirect
//! operators and the pipe are interpreted — no quoting, globbing, variables,
//! or job control.
//!
//! # Architecture
//!
//! - **[`parse`]** — The two-stage core: pipe splitter, whitespace
//!   tokenizer/classifier, and per-segment assembler.
//! - **[`render`]** — Read-only text and JSON rendering of parse results.
//! - **[`error`]** — [`ParseError`]: fatal vs. per-segment syntax errors.
//! - **[`config`]** — Embedded defaults + user overlay merge for the CLI.
//! - **[`logging`]** — Stage diagnostics to stderr.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Parse failure kinds.
pub mod error;
/// Logger initialization.
pub mod logging;
/// Pipeline splitting, tokenization, and subcommand assembly.
pub mod parse;
/// Human- and machine-readable rendering.
pub mod render;

pub use error::ParseError;
pub use parse::{Argument, Commandline, Pipeline, RedirectMode, Subcommand, TokenKind};

/// Parse one raw input line into a [`Pipeline`].
///
/// This is the main entry point for library use. Syntax errors in one
/// segment leave the other segments parsed; see [`Pipeline`].
pub fn parse(line: &str) -> Result<Pipeline, ParseError> {
    parse::parse_line(line)
}
