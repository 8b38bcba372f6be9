//! Runtime argument values.

use serde::Serialize;
use serde_json::Value;

/// A call-time argument, as seen by the parameter classifier.
///
/// Sequences bind one value per element under the declared name, maps
/// bind one value per entry under the entry key. `Null` binds nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arg {
    /// Absent value, contributes no binding.
    #[default]
    Null,
    /// A single value.
    Value(Value),
    /// A collection, fanned out under the declared name.
    Seq(Vec<Value>),
    /// A map, fanned out under each entry key.
    Map(Vec<(String, Value)>),
    /// A value that could not be captured; dropped with a warning.
    Invalid(String),
}

impl Arg {
    /// Capture any serializable value as a single argument.
    ///
    /// Values serializing to `null` become [`Arg::Null`].
    pub fn value<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Null) => Self::Null,
            Ok(value) => Self::Value(value),
            Err(err) => Self::Invalid(err.to_string()),
        }
    }

    /// Capture a collection of values.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_or_else(|err| Self::Invalid(err.to_string()), Self::Seq)
    }

    /// Capture map entries; each key becomes a parameter name.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        entries
            .into_iter()
            .map(|(key, value)| serde_json::to_value(value).map(|value| (key.into(), value)))
            .collect::<Result<Vec<_>, _>>()
            .map_or_else(|err| Self::Invalid(err.to_string()), Self::Map)
    }

    /// Returns `true` for [`Arg::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        if value.is_null() {
            Self::Null
        } else {
            Self::Value(value)
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Value(Value::from(value.as_str()))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Into<Self>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Serialize> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Self::seq(items)
    }
}

/// Build an argument array, converting each expression with [`Arg::from`].
///
/// ```
/// use tongs_core::{Arg, args};
///
/// let args = args!["alice", 42, None::<&str>];
/// assert_eq!(args.len(), 3);
/// assert!(args[2].is_null());
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}
