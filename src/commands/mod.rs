//! Command handlers: typed implementations of the shell's variable commands.
//!
//! Each handler receives a [`CommandContext`] built from the line *after*
//! variable substitution, so `set b $a` sees the value of `a`.

/// `help`: usage text for variables.
pub mod help;
/// `set <name> <value>`: bind a variable.
pub mod set;
/// `show variables`: list every binding.
pub mod show;

use crate::error::VarError;
use crate::session::{CommandContext, Outcome};
use crate::store::VariableStore;

/// Trait for command handlers.
///
/// Each implementation owns one command word and returns an [`Outcome`] for
/// the host to print. Handlers that do not recognise their arguments return
/// [`Outcome::Passthrough`] so the line falls through to the host shell.
pub trait CommandHandler: Send + Sync {
    /// Run the command against the session's store.
    fn run(&self, ctx: &CommandContext, store: &mut VariableStore) -> Result<Outcome, VarError>;
}
