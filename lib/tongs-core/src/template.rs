//! URL templates with `${name}` placeholders.

use std::fmt;

/// A URL with `${name}` placeholders, resolved one name at a time.
///
/// ```
/// use tongs_core::UrlTemplate;
///
/// let mut template = UrlTemplate::new("http://localhost:8080/users/${id}");
/// template.substitute("id", "42");
/// assert_eq!(template.as_str(), "http://localhost:8080/users/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Create a new template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Replace every `${name}` occurrence with `value`.
    ///
    /// Returns `true` if at least one placeholder was replaced.
    pub fn substitute(&mut self, name: &str, value: &str) -> bool {
        let placeholder = format!("${{{name}}}");
        if self.0.contains(&placeholder) {
            self.0 = self.0.replace(&placeholder, value);
            true
        } else {
            false
        }
    }

    /// Names of placeholders still present.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.0.as_str();
        while let Some((_, after)) = rest.split_once("${") {
            let Some((name, tail)) = after.split_once('}') else {
                break;
            };
            names.push(name);
            rest = tail;
        }
        names
    }

    /// The current template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UrlTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
