//! shvars: `$`-delimited variable substitution for an interactive shell.
//!
//! Users bind names to string values with `set name value` and reference them
//! in later lines as `$name`. Every raw line is rewritten by the
//! [`parse::preprocess`] pass before the shell's command parser sees it:
//! `$$` is a literal `$`, a name ends at the next space, `$` or end of line,
//! and an unbound name rejects the whole line.
//!
//! # Architecture
//!
//! - **[`store`]** — Per-session name → value bindings.
//! - **[`parse`]** — Reference scanner, preprocessor, whitespace word splitting.
//! - **[`complete`]** — Completion of in-progress `$name` words.
//! - **[`commands`]** — Typed `set`, `show variables` and `help` handlers.
//! - **[`session`]** — Command registry and the per-session entry point.
//! - **[`editor`]** — rustyline helper wiring completion into the REPL.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — File logger setup.

/// Command handler trait and the variable commands.
pub mod commands;
/// Completion advisor for `$name` references.
pub mod complete;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// rustyline completion helper.
pub mod editor;
/// Error types.
pub mod error;
/// File-based logging.
pub mod logging;
/// Reference scanning and line rewriting.
pub mod parse;
/// Sessions and command dispatch.
pub mod session;
/// Variable bindings.
pub mod store;

pub use error::{ConfigError, VarError};
pub use session::{Outcome, Session};
pub use store::VariableStore;

/// Rewrite `line` against `store`. See [`parse::preprocess`].
pub fn preprocess(line: &str, store: &VariableStore) -> Result<String, VarError> {
    parse::preprocess(line, store)
}

/// Completions for the last word of `words`. See [`complete::complete`].
pub fn complete<S: AsRef<str>>(words: &[S], store: &VariableStore) -> Vec<String> {
    complete::complete(words, store)
}
