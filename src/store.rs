use indexmap::IndexMap;

/// Flat name → value bindings for one shell session.
///
/// Values are stored with leading/trailing ASCII whitespace stripped. Re-binding a
/// name replaces its value but keeps its original position, so iteration
/// follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    vars: IndexMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to [`strip_value`]`(value)`, overwriting any previous
    /// binding.
    pub fn set(&mut self, name: impl Into<String>, value: &str) {
        self.vars.insert(name.into(), strip_value(value).to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Owned snapshot of every binding, for display by the host.
    pub fn list(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Strip leading and trailing ASCII whitespace (space, `\t`, `\n`, `\r`,
/// vertical tab, form feed). Unicode spaces such as U+00A0 are part of the
/// value.
pub fn strip_value(value: &str) -> &str {
    value.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

impl<N: Into<String>, V: AsRef<str>> FromIterator<(N, V)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.set(name, value.as_ref());
        }
        store
    }
}
