// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil;

use thirtyboxes_api::Value;

use crate::util::{OutputFormat, indent, to_raw};

/// Which header line the long rendering gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHeader {
    /// Date-range listing: shows the list bounds.
    Range,
    /// Free-text search: shows the query.
    Search,
    /// Tag search: shows the tag.
    TagSearch,
}

#[derive(Debug)]
pub struct EventFormatter {
    header: EventHeader,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(header: EventHeader) -> Self {
        Self {
            header,
            format: OutputFormat::Long,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, response: &Value) -> String {
        match self.format {
            OutputFormat::Raw => to_raw(response),
            OutputFormat::Short => {
                let mut lines = Vec::new();
                for event in events_of(response) {
                    lines.push(summary_line(event));
                }
                lines.join("\n")
            }
            OutputFormat::Long => {
                let mut lines = vec![self.header_line(response)];
                for event in events_of(response) {
                    lines.extend(block_lines(event));
                }
                lines.join("\n")
            }
        }
    }

    fn header_line(&self, response: &Value) -> String {
        let user_id = field(response, "userId");
        match self.header {
            EventHeader::Range => format!(
                "--- 30boxes events for user {user_id} ({} to {})",
                field(response, "listStart"),
                field(response, "listEnd"),
            ),
            EventHeader::Search => format!(
                "--- 30boxes events for user {user_id} matching '{}'",
                field(response, "search"),
            ),
            EventHeader::TagSearch => format!(
                "--- 30boxes events for user {user_id} with tag '{}'",
                field(response, "tagSearch"),
            ),
        }
    }
}

fn events_of(response: &Value) -> impl Iterator<Item = &Value> {
    response
        .get("events")
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
}

fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    const EMPTY: &Value = &Value::NotApplicable;
    value.get(key).unwrap_or(EMPTY)
}

/// One line per event: `event '<summary>' at <dates> [repeat ...]`.
fn summary_line(event: &Value) -> String {
    let mut s = format!("event '{}' at ", field(event, "summary"));
    s.push_str(&date_summary(event));

    if let Some(repeat) = event.get("repeatType").and_then(Value::as_str) {
        if repeat != "no" {
            s.push_str(" repeat ");
            s.push_str(repeat);
            if let Some(until) = event.get("repeatEndDate") {
                if !until.is_not_applicable() {
                    s.push_str(&format!(" until {until}"));
                }
            }
        }
    }
    s
}

/// Multi-line block per event, yaml-ish:
///
/// ```text
/// - summary : bike to work
///   date    : 2006-02-06 (all day)
///   tags    : personal work
///   privacy : shared
///   id      : 12345
/// ```
fn block_lines(event: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("- summary : {}", field(event, "summary")));

    let all_day = event
        .get("allDayEvent")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let mut date_line = format!("  date    : {}", date_summary(event));
    if all_day {
        date_line.push_str(" (all day)");
    }
    lines.push(date_line);

    if let Some(repeat) = event.get("repeatType").and_then(Value::as_str) {
        if repeat != "no" {
            let mut line = format!("  repeat  : {repeat}");
            if let Some(until) = event.get("repeatEndDate") {
                if !until.is_not_applicable() {
                    line.push_str(&format!(" until {until}"));
                }
            }
            lines.push(line);
        }
    }

    if let Some(tags) = event.get("tags").and_then(Value::as_str) {
        if !tags.is_empty() {
            lines.push(format!("  tags    : {tags}"));
        }
    }

    lines.push(format!("  privacy : {}", field(event, "privacy")));
    lines.push(format!("  id      : {}", field(event, "id")));

    let invited = event
        .get("invitation")
        .and_then(|i| i.get("isInvitation"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if invited {
        if let Some(invitation) = event.get("invitation") {
            lines.push(format!("  invitation: {}", to_raw(invitation)));
        }
    }

    if let Some(notes) = event.get("notes").and_then(Value::as_str) {
        if !notes.is_empty() {
            lines.push("  notes   :".to_string());
            lines.push(indent(notes, 4));
        }
    }

    lines
}

/// Collapses the start/end pair: equal instants show once, same-day
/// ranges append the end time only, and seconds show only when set.
fn date_summary(event: &Value) -> String {
    let Some(start) = date_time_field(event, "start") else {
        return field(event, "start").to_string();
    };

    let all_day = event
        .get("allDayEvent")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if all_day {
        return start.date().to_string();
    }

    let mut summary = format_date_time(start);
    let Some(end) = date_time_field(event, "end") else {
        return summary;
    };

    if start == end {
        // Nothing more to say.
    } else if start.date() == end.date() {
        summary.push('-');
        summary.push_str(&format_time(end));
    } else {
        summary.push_str(" - ");
        summary.push_str(&format_date_time(end));
    }
    summary
}

fn date_time_field(event: &Value, key: &str) -> Option<civil::DateTime> {
    match event.get(key)? {
        Value::DateTime(dt) => Some(*dt),
        Value::Date(d) => Some(d.at(0, 0, 0, 0)),
        _ => None,
    }
}

fn format_date_time(dt: civil::DateTime) -> String {
    if dt.second() == 0 {
        dt.strftime("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.strftime("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn format_time(dt: civil::DateTime) -> String {
    if dt.second() == 0 {
        dt.strftime("%H:%M").to_string()
    } else {
        dt.strftime("%H:%M:%S").to_string()
    }
}
