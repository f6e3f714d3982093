// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil;

use thirtyboxes_api::{DatePoint, Value};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Structured dump of the decoded response
    Raw,
    /// One line per item
    Short,
    /// Multi-line human-readable block
    Long,
}

pub fn parse_date_point(s: &str) -> Result<DatePoint, &'static str> {
    if s.contains(' ') {
        civil::DateTime::strptime("%Y-%m-%d %H:%M:%S", s)
            .map(DatePoint::DateTime)
            .map_err(|_| "Invalid date format. Expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")
    } else {
        civil::Date::strptime("%Y-%m-%d", s)
            .map(DatePoint::Date)
            .map_err(|_| "Invalid date format. Expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")
    }
}

/// Render a decoded value as the raw output format.
pub fn to_raw(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
}

/// Indent every line of `s` by `width` spaces.
pub fn indent(s: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    s.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, datetime};

    #[test]
    fn test_parse_date_point_date_only() {
        let parsed = parse_date_point("2006-02-06").unwrap();
        assert_eq!(parsed, DatePoint::Date(date(2006, 2, 6)));
    }

    #[test]
    fn test_parse_date_point_date_time() {
        let parsed = parse_date_point("2006-02-06 09:30:00").unwrap();
        assert_eq!(parsed, DatePoint::DateTime(datetime(2006, 2, 6, 9, 30, 0, 0)));
    }

    #[test]
    fn test_parse_date_point_invalid() {
        assert!(parse_date_point("tomorrow").is_err());
        assert!(parse_date_point("2006-13-01").is_err());
        assert!(parse_date_point("2006-02-06 25:00:00").is_err());
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 4), "    a\n    b");
        assert_eq!(indent("a", 2), "  a");
    }
}
