// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decoded response values.

use std::collections::BTreeMap;
use std::fmt;

use jiff::civil;

/// A decoded response value.
///
/// Responses decode into a tree of `Value`s: scalars at the leaves,
/// maps and lists for composite elements. The sentinel date
/// `0000-00-00` decodes to [`Value::NotApplicable`], an explicit
/// absent value distinct from any real date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly absent (the `0000-00-00` sentinel). Serializes to `null`.
    NotApplicable,
    /// Pass-through text content.
    Text(String),
    /// Base-10 integer content.
    Int(i64),
    /// Boolean content (`0`/absent false, non-zero true).
    Bool(bool),
    /// A calendar date (`YYYY-MM-DD`).
    Date(civil::Date),
    /// A calendar date with time of day (`YYYY-MM-DD HH:MM:SS`).
    DateTime(civil::DateTime),
    /// Repeated sibling elements accumulated in document order.
    List(Vec<Value>),
    /// A composite element: child tag (or grouping key) to child value.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date content, if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<civil::Date> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the date-time content, if this is a date-time value.
    #[must_use]
    pub const fn as_date_time(&self) -> Option<civil::DateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the items, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a map value.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a key, if this is a map value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Whether this is the explicit absent value.
    #[must_use]
    pub const fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => n.fmt(f),
            Self::Bool(b) => b.fmt(f),
            Self::Date(d) => write!(f, "{}", d.strftime("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.strftime("%Y-%m-%d %H:%M:%S")),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
