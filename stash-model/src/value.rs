//! Typed field values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a schema field.
///
/// This is the closed set of types the store understands. Dates are epoch
/// milliseconds so they order numerically; lists hold strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Bool,
    Date,
    Enum,
    List,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Enum => "enum",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// A typed value held by one record field.
///
/// `Date` carries milliseconds since the Unix epoch. `Enum` holds one of
/// the options declared on its field. An unset optional field is not a
/// `FieldValue` at all — it is simply absent from the record's field map,
/// which keeps "unset" distinct from e.g. an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(i64),
    Enum(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Shorthand for a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Shorthand for a numeric value.
    #[must_use]
    pub fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Shorthand for a boolean value.
    #[must_use]
    pub fn boolean(b: bool) -> Self {
        Self::Bool(b)
    }

    /// Shorthand for a date value (epoch milliseconds).
    #[must_use]
    pub fn date(millis: i64) -> Self {
        Self::Date(millis)
    }

    /// Shorthand for an enum value.
    pub fn enumeration(option: impl Into<String>) -> Self {
        Self::Enum(option.into())
    }

    /// Shorthand for a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// The field type this value inhabits.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::Number(_) => FieldType::Number,
            Self::Bool(_) => FieldType::Bool,
            Self::Date(_) => FieldType::Date,
            Self::Enum(_) => FieldType::Enum,
            Self::List(_) => FieldType::List,
        }
    }

    /// The text payload, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a bool.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The date payload in epoch milliseconds, if this is a date.
    #[must_use]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// The selected option, if this is an enum value.
    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// The items, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}
