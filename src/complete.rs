//! Completion of in-progress `$name` references.

use crate::store::VariableStore;

/// Propose completed lines for a partially typed `$name` in the last word.
///
/// Applies only when the last word starts with a single `$`; a leading `$$`
/// is an escaped dollar and is left alone. Each store name that starts with
/// the text after the `$` produces the word list with its last word replaced
/// by `$name`, joined with single spaces. Results follow store order.
pub fn complete<S: AsRef<str>>(words: &[S], store: &VariableStore) -> Vec<String> {
    let Some((last, head)) = words.split_last() else {
        return Vec::new();
    };
    let Some(partial) = last.as_ref().strip_prefix('$') else {
        return Vec::new();
    };
    if partial.starts_with('$') {
        return Vec::new();
    }

    store
        .names()
        .filter(|name| name.starts_with(partial))
        .map(|name| {
            let reference = format!("${name}");
            head.iter()
                .map(AsRef::as_ref)
                .chain(std::iter::once(reference.as_str()))
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}
