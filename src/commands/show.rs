use crate::commands::CommandHandler;
use crate::error::VarError;
use crate::session::{CommandContext, Outcome};
use crate::store::VariableStore;

/// `show variables`. Other `show` subcommands belong to the host shell.
pub struct ShowCommand;

impl CommandHandler for ShowCommand {
    fn run(&self, ctx: &CommandContext, store: &mut VariableStore) -> Result<Outcome, VarError> {
        match ctx.args() {
            [sub] if *sub == "variables" => Ok(Outcome::Variables(store.list())),
            _ => Ok(Outcome::Passthrough(ctx.raw.to_string())),
        }
    }
}
