//! Ordered multi-valued name/value bindings.

use crate::Role;

/// Ordered multimap of parameter name to textual values.
///
/// Insertion order is preserved, both across names and within the
/// values of one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, String)>,
}

impl Bindings {
    /// Create an empty set of bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// The first value bound under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values bound under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if at least one value is bound under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Distinct names, in first-insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (key, _) in &self.entries {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }
        names
    }

    /// All `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// The bindings of one call, split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedParams {
    /// Path placeholder values.
    pub path: Bindings,
    /// Query parameters.
    pub query: Bindings,
    /// Form fields; the empty name holds the raw body.
    pub body: Bindings,
    /// Headers.
    pub header: Bindings,
    /// File paths to upload.
    pub file: Bindings,
}

impl ClassifiedParams {
    /// The bindings for a role.
    #[must_use]
    pub const fn for_role(&self, role: Role) -> &Bindings {
        match role {
            Role::Path => &self.path,
            Role::Query => &self.query,
            Role::Body => &self.body,
            Role::Header => &self.header,
            Role::File => &self.file,
        }
    }

    /// The mutable bindings for a role.
    pub const fn for_role_mut(&mut self, role: Role) -> &mut Bindings {
        match role {
            Role::Path => &mut self.path,
            Role::Query => &mut self.query,
            Role::Body => &mut self.body,
            Role::Header => &mut self.header,
            Role::File => &mut self.file,
        }
    }
}
