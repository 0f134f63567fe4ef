use super::reference::scan;
use super::types::{Delimiter, Piece};
use crate::error::VarError;
use crate::store::VariableStore;

/// Rewrite a raw line, replacing every `$name` reference with its value.
///
/// `$$` becomes a literal `$`, as does a lone `$` at the end of the line.
/// A name ends at the nearest space, `$` or end of input. A space delimiter
/// is kept after the value; a `$` delimiter is dropped. Values are inserted
/// as-is and never re-scanned.
///
/// Any unbound name fails the whole line with [`VarError::UndefinedVariable`].
pub fn preprocess(line: &str, store: &VariableStore) -> Result<String, VarError> {
    let mut out = String::with_capacity(line.len());

    for piece in scan(line) {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::EscapedDollar => out.push('$'),
            Piece::Reference(token) => {
                let Some(value) = store.get(token.name) else {
                    log::warn!("undefined variable: {:?}", token.name);
                    return Err(VarError::UndefinedVariable(token.name.to_string()));
                };
                log::trace!("${} ended by {}", token.name, token.delimiter.as_str());
                out.push_str(value);
                if token.delimiter == Delimiter::Space {
                    out.push(' ');
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> VariableStore {
        [("name", "alice"), ("x", "x"), ("uploadfn", "theverylonguploadfile.txt")]
            .into_iter()
            .collect()
    }

    fn pp(line: &str) -> Result<String, VarError> {
        preprocess(line, &store())
    }

    #[test]
    fn empty_input() {
        assert_eq!(pp("").unwrap(), "");
    }

    #[test]
    fn text_without_dollar_is_unchanged() {
        for line in [
            "ls",
            "on %1 upload file.txt",
            "  leading and trailing  ",
            "tabs\tand\nnewlines",
            "unicode ✓ text",
            " ",
        ] {
            assert_eq!(pp(line).unwrap(), line, "line: {line:?}");
        }
    }

    #[test]
    fn double_dollar_escapes() {
        assert_eq!(pp("$$").unwrap(), "$");
        assert_eq!(pp("a$$b").unwrap(), "a$b");
        assert_eq!(
            pp("on %1 run need_dollarsign_arg.r2py $$ username").unwrap(),
            "on %1 run need_dollarsign_arg.r2py $ username"
        );
    }

    #[test]
    fn trailing_dollar_is_literal() {
        assert_eq!(pp("trailing$").unwrap(), "trailing$");
        assert_eq!(pp("$").unwrap(), "$");
        assert_eq!(
            pp("run need_dollarsign_arg.r2py $").unwrap(),
            pp("run need_dollarsign_arg.r2py $$").unwrap()
        );
    }

    #[test]
    fn reference_at_end() {
        assert_eq!(pp("hi $name").unwrap(), "hi alice");
    }

    #[test]
    fn reference_keeps_one_space() {
        assert_eq!(pp("$x extra").unwrap(), "x extra");
        assert_eq!(
            pp("loadkeys $name as awesome").unwrap(),
            "loadkeys alice as awesome"
        );
    }

    #[test]
    fn only_the_delimiter_space_is_consumed() {
        assert_eq!(pp("$x   extra").unwrap(), "x   extra");
    }

    #[test]
    fn trailing_space_after_reference_is_kept() {
        assert_eq!(pp("$x ").unwrap(), "x ");
    }

    #[test]
    fn dollar_delimiter_joins_text() {
        assert_eq!(pp("dir/$x$/sub").unwrap(), "dir/x/sub");
        assert_eq!(
            pp("on %1 upload dir/$uploadfn").unwrap(),
            "on %1 upload dir/theverylonguploadfile.txt"
        );
        assert_eq!(pp("$name$rest").unwrap(), "alicerest");
    }

    #[test]
    fn dollar_delimiter_at_end() {
        assert_eq!(pp("$x$").unwrap(), "x");
    }

    #[test]
    fn escape_after_reference() {
        // `$x$` ends the reference, the remaining `$` is a lone trailing one.
        assert_eq!(pp("$x$$").unwrap(), "x$");
    }

    #[test]
    fn punctuation_extends_name() {
        assert_eq!(
            pp("hi $name!"),
            Err(VarError::UndefinedVariable("name!".into()))
        );
    }

    #[test]
    fn undefined_variable_fails_whole_line() {
        assert_eq!(
            pp("$missing"),
            Err(VarError::UndefinedVariable("missing".into()))
        );
        assert_eq!(
            pp("hi $name and $missing then $x"),
            Err(VarError::UndefinedVariable("missing".into()))
        );
    }

    #[test]
    fn dollar_space_is_empty_name() {
        assert_eq!(pp("a $ b"), Err(VarError::UndefinedVariable(String::new())));
    }

    #[test]
    fn values_are_not_rescanned() {
        let mut store = store();
        store.set("price", "$name");
        assert_eq!(preprocess("costs $price", &store).unwrap(), "costs $name");
    }

    #[test]
    fn second_pass_rescans_values_with_dollar() {
        let mut store = store();
        store.set("price", "$name");
        let once = preprocess("costs $price", &store).unwrap();
        assert_eq!(preprocess(&once, &store).unwrap(), "costs alice");
    }

    #[test]
    fn trailing_escape_is_stable() {
        let once = pp("total$$").unwrap();
        assert_eq!(once, "total$");
        assert_eq!(pp(&once).unwrap(), "total$");
    }

    #[test]
    fn empty_value() {
        let mut store = VariableStore::new();
        store.set("e", "   ");
        assert_eq!(preprocess("[$e$]", &store).unwrap(), "[]");
        assert_eq!(preprocess("a $e b", &store).unwrap(), "a  b");
    }
}
