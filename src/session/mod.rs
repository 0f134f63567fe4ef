pub mod context;
pub mod outcome;

pub use context::CommandContext;
pub use outcome::Outcome;

use std::collections::HashMap;

use crate::commands::CommandHandler;
use crate::config::Config;
use crate::error::VarError;
use crate::parse;
use crate::store::VariableStore;

/// Registry of command handlers, keyed by command word.
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Registry with the variable commands: `set`, `show`, `help`.
    pub fn new() -> Self {
        use crate::commands::{help::HelpCommand, set::SetCommand, show::ShowCommand};

        let mut handlers: HashMap<String, Box<dyn CommandHandler>> = HashMap::new();
        handlers.insert("set".into(), Box::new(SetCommand));
        handlers.insert("show".into(), Box::new(ShowCommand));
        handlers.insert("help".into(), Box::new(HelpCommand));
        Self { handlers }
    }

    /// Look up a handler by exact command word.
    fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.handlers.get(name).map(|b| b.as_ref())
    }

    /// Run an already-rewritten line. Lines with no handler pass through.
    pub fn dispatch(&self, line: &str, store: &mut VariableStore) -> Result<Outcome, VarError> {
        let ctx = CommandContext::from_line(line);
        if ctx.words.is_empty() {
            return Ok(Outcome::Empty);
        }
        match self.get(ctx.command()) {
            Some(handler) => handler.run(&ctx, store),
            None => Ok(Outcome::Passthrough(line.to_string())),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One shell session: its variable bindings and the commands that use them.
pub struct Session {
    store: VariableStore,
    registry: CommandRegistry,
}

impl Session {
    /// Empty session with the default commands.
    pub fn new() -> Self {
        Self {
            store: VariableStore::new(),
            registry: CommandRegistry::new(),
        }
    }

    /// Session seeded with the configured preset variables.
    pub fn from_config(config: &Config) -> Self {
        let mut session = Self::new();
        for (name, value) in &config.variables.define {
            session.store.set(name.as_str(), value);
        }
        log::debug!("session created with {} preset variable(s)", session.store.len());
        session
    }

    /// Substitute variables in `raw` and run the resulting command.
    ///
    /// An undefined variable rejects the whole line before any command runs.
    pub fn handle_line(&mut self, raw: &str) -> Result<Outcome, VarError> {
        let line = parse::preprocess(raw, &self.store)?;
        if line != raw {
            log::debug!(
                "rewrote {raw:?} -> {line:?} ({} reference(s))",
                parse::references(raw).len()
            );
        }
        let outcome = self.registry.dispatch(&line, &mut self.store)?;
        log::debug!("handled line: {}", outcome.as_str());
        Ok(outcome)
    }

    /// Substitute variables in `raw` without running anything.
    pub fn preprocess(&self, raw: &str) -> Result<String, VarError> {
        parse::preprocess(raw, &self.store)
    }

    /// Completions for an in-progress `$name` in the last word.
    pub fn complete<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        crate::complete::complete(words, &self.store)
    }

    pub fn set(&mut self, name: impl Into<String>, value: &str) {
        self.store.set(name, value);
    }

    pub fn list_variables(&self) -> Vec<(String, String)> {
        self.store.list()
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
