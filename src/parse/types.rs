//! Types produced by the reference scanner and consumed by the preprocessor.

/// What ended a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// The name ran to the end of the line.
    EndOfInput,
    /// A space ended the name. The substituted value keeps one space after it.
    Space,
    /// A second `$` ended the name. The `$` is syntax and is dropped.
    Dollar,
}

impl Delimiter {
    /// Bytes consumed after the name.
    pub fn width(self) -> usize {
        match self {
            Delimiter::EndOfInput => 0,
            Delimiter::Space | Delimiter::Dollar => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::EndOfInput => "end of input",
            Delimiter::Space => "space",
            Delimiter::Dollar => "$",
        }
    }
}

/// A `$name` occurrence found in a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceToken<'a> {
    /// Byte offset of the introducing `$` in the scanned line.
    pub offset: usize,
    /// The variable name, possibly empty (`"$ "`).
    pub name: &'a str,
    pub delimiter: Delimiter,
}

impl ReferenceToken<'_> {
    /// Byte offset just past the reference, including its delimiter.
    pub fn end(&self) -> usize {
        self.offset + 1 + self.name.len() + self.delimiter.width()
    }
}

/// One unit of a scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// `$$`, or a lone `$` at the end of the line. Emits a single `$`.
    EscapedDollar,
    /// A variable reference to resolve.
    Reference(ReferenceToken<'a>),
}
