use super::types::{Delimiter, Piece, ReferenceToken};

/// Left-to-right scanner that splits a raw line into [`Piece`]s.
///
/// The scan never backtracks. `$` and space are ASCII, so every byte offset
/// it produces is a char boundary.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Scan the text right after a `$` found at `offset`.
    fn after_dollar(&mut self, offset: usize) -> Piece<'a> {
        let line = self.line;
        let rest = &line[offset + 1..];

        // `$$` is an escaped dollar; so is a `$` with nothing after it.
        if rest.is_empty() || rest.starts_with('$') {
            self.pos = offset + 1 + rest.len().min(1);
            return Piece::EscapedDollar;
        }

        // The name ends at whichever comes first: space, `$`, end of input.
        // Both missing is a tie at `rest.len()`, which means end of input.
        let space = rest.find(' ').unwrap_or(rest.len());
        let dollar = rest.find('$').unwrap_or(rest.len());
        let name_len = space.min(dollar);
        let delimiter = if name_len == rest.len() {
            Delimiter::EndOfInput
        } else if space < dollar {
            Delimiter::Space
        } else {
            Delimiter::Dollar
        };

        let token = ReferenceToken {
            offset,
            name: &rest[..name_len],
            delimiter,
        };
        self.pos = token.end();
        Piece::Reference(token)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let line = self.line;
        let rest = &line[self.pos..];
        if rest.is_empty() {
            return None;
        }
        match rest.find('$') {
            None => {
                self.pos = line.len();
                Some(Piece::Literal(rest))
            }
            Some(0) => Some(self.after_dollar(self.pos)),
            Some(n) => {
                self.pos += n;
                Some(Piece::Literal(&rest[..n]))
            }
        }
    }
}

/// Scan `line` into literal runs, escaped dollars and references.
pub fn scan(line: &str) -> Scanner<'_> {
    Scanner::new(line)
}

/// Names referenced by `line`, in order of appearance, duplicates included.
pub fn references(line: &str) -> Vec<&str> {
    scan(line)
        .filter_map(|piece| match piece {
            Piece::Reference(token) => Some(token.name),
            _ => None,
        })
        .collect()
}
