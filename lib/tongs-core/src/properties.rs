//! Java-style `.properties` resources.

use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Error, Result};

/// Key/value settings loaded from a `.properties` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    location: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl Properties {
    /// Load a properties file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|err| Error::properties(path.display().to_string(), err))?;
        let mut properties = Self::read(BufReader::new(file), &path.display().to_string())?;
        properties.location = Some(path.to_path_buf());
        Ok(properties)
    }

    /// Parse properties from text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::read(text.as_bytes(), "<inline>")
    }

    fn read(reader: impl Read, location: &str) -> Result<Self> {
        let values =
            java_properties::read(reader).map_err(|err| Error::properties(location, err))?;
        Ok(Self {
            location: None,
            values,
        })
    }

    /// Where the properties were loaded from, if from a file.
    #[must_use]
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    fn describe(&self) -> String {
        self.location
            .as_ref()
            .map_or_else(|| "<inline>".to_string(), |path| path.display().to_string())
    }

    /// The raw value for `key`, trimmed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.trim())
    }

    /// The value for `key`, failing with a configuration error when absent or blank.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                Error::configuration(format!("'{key}' is not defined in {}", self.describe()))
            })
    }

    /// Parse the value for `key`; `None` when absent or blank.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key).filter(|value| !value.is_empty()) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|err| {
                Error::configuration(format!(
                    "invalid value '{raw}' for '{key}' in {}: {err}",
                    self.describe()
                ))
            }),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
