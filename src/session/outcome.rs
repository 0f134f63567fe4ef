/// What handling one line produced. Printing is up to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; nothing to do.
    Empty,
    /// `set` bound `name` to `value` (already stripped).
    Assigned { name: String, value: String },
    /// `show variables` listing, in store order.
    Variables(Vec<(String, String)>),
    /// `help` text.
    Help(&'static str),
    /// No handler owns this line; the rewritten line goes to the host.
    Passthrough(String),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Empty => "empty",
            Outcome::Assigned { .. } => "assigned",
            Outcome::Variables(_) => "variables",
            Outcome::Help(_) => "help",
            Outcome::Passthrough(_) => "passthrough",
        }
    }
}
