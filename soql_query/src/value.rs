//! Query values
//!
//! Tagged values accepted by the filter compiler. A field in a query expression
//! maps to one of these, and the compiler classifies it exactly once through
//! [`QueryValue::classify`] before dispatching.

use crate::errors::TranslateError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// A value inside a filter object
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<QueryValue>),
    /// Ordered mapping; entries keep insertion order
    Object(Vec<(String, QueryValue)>),
}

/// How a field entry is compiled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldMatch<'a> {
    /// Array value, implicit `IN`
    Set(&'a [QueryValue]),
    /// Operator mapping such as `{ "$gt": 18, "$lt": 65 }`
    Operators(&'a [(String, QueryValue)]),
    /// Scalar, date or null, implicit equality
    Literal(&'a QueryValue),
}

impl QueryValue {
    /// Build an ordered mapping value
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, QueryValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array value
    pub fn array<T, I>(items: I) -> Self
    where
        T: Into<QueryValue>,
        I: IntoIterator<Item = T>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn classify(&self) -> FieldMatch<'_> {
        match self {
            QueryValue::Array(items) => FieldMatch::Set(items),
            QueryValue::Object(entries) => FieldMatch::Operators(entries),
            other => FieldMatch::Literal(other),
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, QueryValue::Array(_) | QueryValue::Object(_))
    }

    /// JSON view of the value, dates rendered as ISO-8601 strings
    pub fn to_json(&self) -> Value {
        match self {
            QueryValue::Null => Value::Null,
            QueryValue::Bool(b) => Value::Bool(*b),
            QueryValue::Number(n) => Value::Number(n.clone()),
            QueryValue::String(s) => Value::String(s.clone()),
            QueryValue::Date(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            QueryValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            QueryValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Value> for QueryValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => QueryValue::Null,
            Value::Bool(b) => QueryValue::Bool(b),
            Value::Number(n) => QueryValue::Number(n),
            Value::String(s) => QueryValue::String(s),
            Value::Array(items) => QueryValue::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                QueryValue::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for QueryValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl TryFrom<f64> for QueryValue {
    type Error = TranslateError;

    /// Fails for NaN and infinities, which have no literal form
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .map(QueryValue::Number)
            .ok_or_else(|| {
                TranslateError::malformed(format!("number {} has no literal form", value))
            })
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::Date(value)
    }
}

impl From<NaiveDate> for QueryValue {
    /// Midnight UTC of the given day
    fn from(value: NaiveDate) -> Self {
        QueryValue::Date(value.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::array(values)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}
