//! XML transformers.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::ResultTransform;
use crate::{Error, HttpResult, Result};

/// Transformers over the XML body.
#[must_use]
pub const fn xml() -> XmlTransformer {
    XmlTransformer
}

/// XML transformations of the whole body.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlTransformer;

impl XmlTransformer {
    /// The root element deserialized into `T`.
    #[must_use]
    pub fn object<T>(self) -> impl ResultTransform<T>
    where
        T: DeserializeOwned,
    {
        |result: &HttpResult| from_xml::<T>(result.response_string_content())
    }

    /// Each child element of the root deserialized into `T`.
    ///
    /// Child names are not checked; attributes and text of the root are
    /// skipped.
    #[must_use]
    pub fn list<T>(self) -> impl ResultTransform<Vec<T>>
    where
        T: DeserializeOwned,
    {
        |result: &HttpResult| {
            from_xml::<Children<T>>(result.response_string_content()).map(|children| children.0)
        }
    }

    /// The children of the root as a map from element name to content.
    #[must_use]
    pub fn map<K, V>(self) -> impl ResultTransform<HashMap<K, V>>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        |result: &HttpResult| from_xml::<HashMap<K, V>>(result.response_string_content())
    }
}

fn from_xml<T: DeserializeOwned>(content: &str) -> Result<T> {
    quick_xml::de::from_str(content).map_err(|e| Error::xml(e.to_string()))
}

/// Child elements of a root element, whatever their names.
struct Children<T>(Vec<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Children<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ChildrenVisitor(PhantomData))
    }
}

struct ChildrenVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ChildrenVisitor<T> {
    type Value = Children<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an element with child elements")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            if name.starts_with('@') || name == "$text" {
                map.next_value::<IgnoredAny>()?;
            } else {
                items.push(map.next_value()?);
            }
        }
        Ok(Children(items))
    }
}
