use crate::commands::CommandHandler;
use crate::error::VarError;
use crate::session::{CommandContext, Outcome};
use crate::store::VariableStore;

/// Usage text for variables, references and `$` escaping.
pub const HELP_TEXT: &str = include_str!("help.txt");

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn run(&self, ctx: &CommandContext, _store: &mut VariableStore) -> Result<Outcome, VarError> {
        match ctx.args() {
            [] => Ok(Outcome::Help(HELP_TEXT)),
            [topic] if *topic == "variables" || *topic == "set" => Ok(Outcome::Help(HELP_TEXT)),
            _ => Ok(Outcome::Passthrough(ctx.raw.to_string())),
        }
    }
}
