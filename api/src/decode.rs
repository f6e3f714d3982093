// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Table-driven decoding of API response documents.

use std::collections::BTreeMap;

use jiff::civil;

use crate::error::ThirtyBoxesError;
use crate::table::{Accumulate, DecodeTable, FieldKind, Grouping};
use crate::value::Value;
use crate::xml::{self, Element};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_EXPECTED: &str = "'YYYY-MM-DD'";
const DATE_TIME_EXPECTED: &str = "'YYYY-MM-DD' or 'YYYY-MM-DD HH:MM:SS'";

/// The "no date" sentinel the API emits in date fields.
const SENTINEL_DATE: &str = "0000-00-00";

/// Decodes a raw response document against a decode table.
///
/// Children are decoded before their parents, so composite rules see
/// decoded values only. The decoded tree is built fresh; the parsed
/// document is discarded when this returns.
///
/// # Errors
///
/// Returns [`ThirtyBoxesError::Api`] when the envelope status is
/// `fail`, [`ThirtyBoxesError::UnknownTag`] when an element has no
/// entry in `table`, and [`ThirtyBoxesError::Malformed`] when a known
/// element carries text its rule cannot decode. No partial result is
/// ever returned alongside an error.
pub fn decode(raw: &[u8], table: &DecodeTable) -> Result<Value, ThirtyBoxesError> {
    let root = xml::parse(raw)?;
    if root.tag != "rsp" {
        return Err(ThirtyBoxesError::UnknownTag {
            family: table.name(),
            tag: root.tag,
        });
    }

    match root.attr("stat") {
        Some("ok") => decode_envelope(&root, table),
        Some("fail") => Err(decode_failure(&root, table)?),
        Some(other) => Err(ThirtyBoxesError::InvalidResponse(format!(
            "unexpected envelope status {other:?}"
        ))),
        None => Err(ThirtyBoxesError::InvalidResponse(
            "envelope is missing the stat attribute".to_string(),
        )),
    }
}

/// A failure envelope holds a single `err` record whose `code` and
/// `msg` attributes become the error; it never yields a decoded value.
fn decode_failure(
    root: &Element,
    table: &DecodeTable,
) -> Result<ThirtyBoxesError, ThirtyBoxesError> {
    let record = root.children.first().ok_or_else(|| {
        ThirtyBoxesError::InvalidResponse("failure envelope has no error record".to_string())
    })?;
    if record.tag != "err" {
        return Err(ThirtyBoxesError::UnknownTag {
            family: table.name(),
            tag: record.tag.clone(),
        });
    }

    let code = record.attr("code").ok_or_else(|| {
        ThirtyBoxesError::InvalidResponse("error record has no code attribute".to_string())
    })?;
    let code = code
        .trim()
        .parse()
        .map_err(|_| ThirtyBoxesError::Malformed {
            tag: record.tag.clone(),
            text: code.to_string(),
            expected: "an integer error code",
        })?;
    let message = record.attr("msg").unwrap_or_default().to_string();
    Ok(ThirtyBoxesError::Api { code, message })
}

fn decode_envelope(root: &Element, table: &DecodeTable) -> Result<Value, ThirtyBoxesError> {
    let mut decoded = Vec::with_capacity(root.children.len());
    for child in &root.children {
        decoded.push((child.tag.clone(), decode_element(child, table)?));
    }

    // A single-child envelope collapses to that child's value (e.g. the
    // <user> response); otherwise the children form a map (e.g. ping).
    match decoded.len() {
        0 => Err(ThirtyBoxesError::InvalidResponse(
            "envelope has no content".to_string(),
        )),
        1 => Ok(decoded.remove(0).1),
        _ => Ok(Value::Map(decoded.into_iter().collect())),
    }
}

fn decode_element(elem: &Element, table: &DecodeTable) -> Result<Value, ThirtyBoxesError> {
    let kind = table
        .kind_of(&elem.tag)
        .ok_or_else(|| ThirtyBoxesError::UnknownTag {
            family: table.name(),
            tag: elem.tag.clone(),
        })?;

    match kind {
        FieldKind::Text => Ok(Value::Text(elem.text.clone())),
        FieldKind::Int => decode_int(elem).map(Value::Int),
        FieldKind::Bool => decode_bool(elem),
        FieldKind::Date => decode_date(elem),
        FieldKind::DateTime => decode_date_time(elem),
        FieldKind::Notes => decode_notes(elem, table),
        FieldKind::Composite(groups) => decode_composite(elem, groups, table),
    }
}

fn decode_int(elem: &Element) -> Result<i64, ThirtyBoxesError> {
    elem.text
        .trim()
        .parse()
        .map_err(|_| ThirtyBoxesError::Malformed {
            tag: elem.tag.clone(),
            text: elem.text.clone(),
            expected: "a base-10 integer",
        })
}

fn decode_bool(elem: &Element) -> Result<Value, ThirtyBoxesError> {
    if elem.text.trim().is_empty() {
        return Ok(Value::Bool(false));
    }
    decode_int(elem).map(|n| Value::Bool(n != 0))
}

fn decode_date(elem: &Element) -> Result<Value, ThirtyBoxesError> {
    let text = elem.text.trim();
    if text == SENTINEL_DATE {
        return Ok(Value::NotApplicable);
    }
    civil::Date::strptime(DATE_FORMAT, text)
        .map(Value::Date)
        .map_err(|_| malformed_date(elem, DATE_EXPECTED))
}

fn decode_date_time(elem: &Element) -> Result<Value, ThirtyBoxesError> {
    let text = elem.text.trim();
    if text == SENTINEL_DATE {
        return Ok(Value::NotApplicable);
    }
    if text.contains(' ') {
        civil::DateTime::strptime(DATE_TIME_FORMAT, text)
            .map(Value::DateTime)
            .map_err(|_| malformed_date(elem, DATE_TIME_EXPECTED))
    } else {
        civil::Date::strptime(DATE_FORMAT, text)
            .map(Value::Date)
            .map_err(|_| malformed_date(elem, DATE_TIME_EXPECTED))
    }
}

fn malformed_date(elem: &Element, expected: &'static str) -> ThirtyBoxesError {
    ThirtyBoxesError::Malformed {
        tag: elem.tag.clone(),
        text: elem.text.clone(),
        expected,
    }
}

/// Notes arrive with literal line breaks as `<br/>` sub-elements; each
/// break becomes a newline followed by the break's tail text.
fn decode_notes(elem: &Element, table: &DecodeTable) -> Result<Value, ThirtyBoxesError> {
    let mut notes = elem.text.clone();
    for child in &elem.children {
        if child.tag != "br" {
            return Err(ThirtyBoxesError::UnknownTag {
                family: table.name(),
                tag: child.tag.clone(),
            });
        }
        notes.push('\n');
        notes.push_str(&child.tail);
    }
    Ok(Value::Text(notes))
}

fn decode_composite(
    elem: &Element,
    groups: &[Grouping],
    table: &DecodeTable,
) -> Result<Value, ThirtyBoxesError> {
    let mut entries = BTreeMap::new();

    // Grouped keys are always present, empty when no children match.
    for group in groups {
        let empty = match group.how {
            Accumulate::List => Value::List(Vec::new()),
            Accumulate::TypedMap => Value::Map(BTreeMap::new()),
        };
        entries.insert(group.key.to_string(), empty);
    }

    for child in &elem.children {
        let value = decode_element(child, table)?;
        match groups.iter().find(|group| group.child == child.tag) {
            Some(group) => accumulate(&mut entries, group, child, value)?,
            None => {
                entries.insert(child.tag.clone(), value);
            }
        }
    }

    Ok(Value::Map(entries))
}

fn accumulate(
    entries: &mut BTreeMap<String, Value>,
    group: &Grouping,
    child: &Element,
    value: Value,
) -> Result<(), ThirtyBoxesError> {
    match (group.how, entries.get_mut(group.key)) {
        (Accumulate::List, Some(Value::List(items))) => {
            items.push(value);
            Ok(())
        }
        (Accumulate::TypedMap, Some(Value::Map(typed))) => {
            // An IM entry decodes to {type, username}; the composite
            // re-keys it by type.
            let kind = value
                .get("type")
                .and_then(Value::as_str)
                .ok_or_else(|| ThirtyBoxesError::InvalidResponse(
                    format!("<{}> record has no type field", child.tag),
                ))?
                .to_string();
            let username = value
                .get("username")
                .cloned()
                .unwrap_or_else(|| Value::Text(String::new()));
            typed.insert(kind, username);
            Ok(())
        }
        _ => Err(ThirtyBoxesError::InvalidResponse(format!(
            "conflicting entries under the {:?} key",
            group.key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{EVENTS, PING, USER};

    #[test]
    fn ping_decodes_to_map() {
        let raw = b"<rsp stat=\"ok\"><ping>pong</ping><msg>API key for user 1234 was verified.</msg></rsp>";
        let value = decode(raw, &PING).unwrap();
        assert_eq!(value.get("ping").and_then(Value::as_str), Some("pong"));
        assert_eq!(
            value.get("msg").and_then(Value::as_str),
            Some("API key for user 1234 was verified.")
        );
    }

    #[test]
    fn failure_envelope_is_an_api_error() {
        let raw = b"<rsp stat=\"fail\"><err code=\"4\" msg=\"bad key\"/></rsp>";
        match decode(raw, &PING) {
            Err(ThirtyBoxesError::Api { code, message }) => {
                assert_eq!(code, 4);
                assert_eq!(message, "bad key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_fatal() {
        let raw = b"<rsp stat=\"ok\"><ping>pong</ping><surprise>!</surprise></rsp>";
        match decode(raw, &PING) {
            Err(ThirtyBoxesError::UnknownTag { family, tag }) => {
                assert_eq!(family, "ping");
                assert_eq!(tag, "surprise");
            }
            other => panic!("expected UnknownTag error, got {other:?}"),
        }
    }

    #[test]
    fn missing_stat_is_invalid() {
        assert!(matches!(
            decode(b"<rsp><ping>pong</ping></rsp>", &PING),
            Err(ThirtyBoxesError::InvalidResponse(_))
        ));
    }

    #[test]
    fn sentinel_date_is_not_applicable() {
        let raw = b"<rsp stat=\"ok\"><eventList><event><repeatEndDate>0000-00-00</repeatEndDate></event></eventList></rsp>";
        let value = decode(raw, &EVENTS).unwrap();
        let events = value.get("events").and_then(Value::as_list).unwrap();
        assert!(events[0].get("repeatEndDate").unwrap().is_not_applicable());
    }

    #[test]
    fn malformed_date_names_tag_and_text() {
        let raw = b"<rsp stat=\"ok\"><eventList><listStart>not-a-date</listStart></eventList></rsp>";
        match decode(raw, &EVENTS) {
            Err(ThirtyBoxesError::Malformed { tag, text, .. }) => {
                assert_eq!(tag, "listStart");
                assert_eq!(text, "not-a-date");
            }
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_feeds_accumulate_in_order() {
        let raw = b"<rsp stat=\"ok\"><user>\
            <id>1</id>\
            <feed><name>a</name><url>http://a</url></feed>\
            <feed><name>b</name><url>http://b</url></feed>\
            </user></rsp>";
        let user = decode(raw, &USER).unwrap();
        let feeds = user.get("feeds").and_then(Value::as_list).unwrap();
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].get("name").and_then(Value::as_str), Some("a"));
        assert_eq!(feeds[1].get("name").and_then(Value::as_str), Some("b"));
    }

    #[test]
    fn im_entries_key_by_type() {
        let raw = b"<rsp stat=\"ok\"><user>\
            <IM><type>AIM</type><username>trento</username></IM>\
            <IM><type>Skype</type><username></username></IM>\
            </user></rsp>";
        let user = decode(raw, &USER).unwrap();
        let im = user.get("IM").and_then(Value::as_map).unwrap();
        assert_eq!(
            im.get("AIM").and_then(Value::as_str),
            Some("trento")
        );
        assert_eq!(im.get("Skype").and_then(Value::as_str), Some(""));
    }

    #[test]
    fn grouped_keys_are_present_when_empty() {
        let raw = b"<rsp stat=\"ok\"><user><id>1</id></user></rsp>";
        let user = decode(raw, &USER).unwrap();
        assert_eq!(user.get("feeds"), Some(&Value::List(Vec::new())));
        assert_eq!(user.get("emails"), Some(&Value::List(Vec::new())));
        assert_eq!(user.get("buddies"), Some(&Value::List(Vec::new())));
        assert!(user.get("IM").and_then(Value::as_map).unwrap().is_empty());
    }

    #[test]
    fn notes_reassemble_line_breaks() {
        let raw = b"<rsp stat=\"ok\"><eventList><event>\
            <notes>line one<br/>line two<br/>line three</notes>\
            </event></eventList></rsp>";
        let value = decode(raw, &EVENTS).unwrap();
        let events = value.get("events").and_then(Value::as_list).unwrap();
        assert_eq!(
            events[0].get("notes").and_then(Value::as_str),
            Some("line one\nline two\nline three")
        );
    }

    #[test]
    fn decoding_is_deterministic() {
        let raw = b"<rsp stat=\"ok\"><ping>pong</ping><msg>hello</msg></rsp>";
        assert_eq!(decode(raw, &PING).unwrap(), decode(raw, &PING).unwrap());
    }
}
