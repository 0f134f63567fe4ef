use crate::parse::split_leading;

/// Context for running a command on an already-rewritten line.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The rewritten line, after variable substitution.
    pub raw: &'a str,
    /// All whitespace-separated words in the line.
    pub words: Vec<&'a str>,
}

impl<'a> CommandContext<'a> {
    /// Build a CommandContext from a rewritten line.
    pub fn from_line(raw: &'a str) -> Self {
        Self {
            raw,
            words: raw.split_whitespace().collect(),
        }
    }

    /// The command word (e.g. "set", "show"), or `""` for a blank line.
    pub fn command(&self) -> &'a str {
        self.words.first().copied().unwrap_or("")
    }

    /// Words after the command word.
    pub fn args(&self) -> &[&'a str] {
        if self.words.len() > 1 {
            &self.words[1..]
        } else {
            &[]
        }
    }

    /// Raw text following the command word and the next `n` arguments,
    /// exactly as typed.
    pub fn rest_after_args(&self, n: usize) -> &'a str {
        split_leading(self.raw, n + 1).1
    }
}
