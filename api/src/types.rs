// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use jiff::civil;

/// 30boxes API key.
///
/// Every API call except `getKeyForUser` carries an `ApiKey` as the
/// `apiKey` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new `ApiKey` from a string.
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self(key)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ApiKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// 30boxes authorized user token.
///
/// Obtained through the `user.Authorize` browser flow; required by the
/// per-user operations (`user.GetAllInfo`, `events.*`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new `AuthToken` from a string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for AuthToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// A date or date-time bound for `events.Get`.
///
/// Rendered in the API's wire format: `YYYY-MM-DD` for dates and
/// `YYYY-MM-DD HH:MM:SS` for date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePoint {
    /// A calendar date.
    Date(civil::Date),
    /// A calendar date with a time of day.
    DateTime(civil::DateTime),
}

impl fmt::Display for DatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.strftime("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.strftime("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<civil::Date> for DatePoint {
    fn from(d: civil::Date) -> Self {
        Self::Date(d)
    }
}

impl From<civil::DateTime> for DatePoint {
    fn from(dt: civil::DateTime) -> Self {
        Self::DateTime(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, datetime};

    #[test]
    fn date_point_renders_wire_format() {
        let d = DatePoint::from(date(2006, 2, 6));
        assert_eq!(d.to_string(), "2006-02-06");

        let dt = DatePoint::from(datetime(2006, 2, 6, 9, 5, 0, 0));
        assert_eq!(dt.to_string(), "2006-02-06 09:05:00");
    }
}
