//! Line-editor glue: tab completion of `$name` references for rustyline.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;

use crate::complete::complete;
use crate::parse::completion_words;
use crate::store::VariableStore;

/// rustyline helper holding a snapshot of the session's variables.
///
/// The host refreshes the snapshot before every prompt, so completion never
/// borrows the live session.
#[derive(Debug, Default)]
pub struct VarsHelper {
    pub store: VariableStore,
}

impl VarsHelper {
    pub fn new(store: VariableStore) -> Self {
        Self { store }
    }
}

/// Completions for `line` with the cursor at byte `pos`.
///
/// Every candidate replaces the text from the start of the line up to the
/// cursor; its display is just the completed `$name` word.
pub fn line_completions(line: &str, pos: usize, store: &VariableStore) -> (usize, Vec<Pair>) {
    let line_to_cursor = &line[..pos];
    let words = completion_words(line_to_cursor);

    let candidates = complete(&words, store)
        .into_iter()
        .map(|replacement| {
            let display = replacement
                .rsplit(' ')
                .next()
                .unwrap_or(replacement.as_str())
                .to_string();
            Pair {
                display,
                replacement,
            }
        })
        .collect();

    (0, candidates)
}

impl Completer for VarsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(line_completions(line, pos, &self.store))
    }
}

impl Hinter for VarsHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for VarsHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Borrowed(hint)
    }
}

impl Validator for VarsHelper {}

impl Helper for VarsHelper {}
