/// Split off up to `count` leading whitespace-separated words.
///
/// Returns the words and the untouched remainder of the line, which starts
/// right after the last word taken (its leading whitespace included). No
/// quoting or escaping is interpreted: values are user data.
pub fn split_leading(line: &str, count: usize) -> (Vec<&str>, &str) {
    let mut words = Vec::with_capacity(count);
    let mut rest = line;
    while words.len() < count {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return (words, trimmed);
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        words.push(&trimmed[..end]);
        rest = &trimmed[end..];
    }
    (words, rest)
}

/// Split the text left of the cursor into the word list the completion
/// advisor expects. A trailing space starts a new, empty word.
pub fn completion_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    if line.is_empty() || line.ends_with(char::is_whitespace) {
        words.push("");
    }
    words
}
