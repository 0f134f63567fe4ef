use crate::commands::CommandHandler;
use crate::error::VarError;
use crate::session::{CommandContext, Outcome};
use crate::store::{VariableStore, strip_value};

/// `set <name> <value>`.
///
/// The name is the first word after `set`; the value is the rest of the
/// rewritten line exactly as typed, then stripped by the store. Quotes,
/// backslashes and `#` are ordinary characters.
pub struct SetCommand;

impl CommandHandler for SetCommand {
    fn run(&self, ctx: &CommandContext, store: &mut VariableStore) -> Result<Outcome, VarError> {
        let Some(&name) = ctx.args().first() else {
            return Err(VarError::MissingVariableName);
        };
        let value = ctx.rest_after_args(1);
        if strip_value(value).is_empty() {
            return Err(VarError::MissingAssignmentValue);
        }

        store.set(name, value);
        let value = store.get(name).unwrap_or_default().to_string();
        log::info!("set {name} = {value:?}");

        Ok(Outcome::Assigned {
            name: name.to_string(),
            value,
        })
    }
}
