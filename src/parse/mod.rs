pub mod preprocess;
pub mod reference;
pub mod tokenize;
pub mod types;

pub use preprocess::preprocess;
pub use reference::{Scanner, references, scan};
pub use tokenize::{completion_words, split_leading};
pub use types::{Delimiter, Piece, ReferenceToken};
