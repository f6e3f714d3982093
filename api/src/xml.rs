// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! XML element tree assembly for API responses.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ThirtyBoxesError;

/// A parsed XML element.
///
/// The tree exists only for the duration of one decode call. `tail`
/// holds the text that follows the element inside its parent; the
/// `notes` decoder needs it to reassemble text broken up by `<br/>`.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub tail: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(tag: String, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag,
            attrs,
            text: String::new(),
            tail: String::new(),
            children: Vec::new(),
        }
    }

    /// Looks up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses a raw response document into an element tree.
pub(crate) fn parse(raw: &[u8]) -> Result<Element, ThirtyBoxesError> {
    let mut reader = Reader::from_reader(raw);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(element_from_start(e)?),
            Event::Empty(ref e) => {
                let elem = element_from_start(e)?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::End(_) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| ThirtyBoxesError::Xml("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, elem)?;
            }
            Event::Text(ref t) => {
                let text = t.decode().map_err(quick_xml::Error::from)?;
                append_text(&mut stack, &text);
            }
            Event::CData(ref t) => {
                let text = String::from_utf8_lossy(t);
                append_text(&mut stack, &text);
            }
            Event::GeneralRef(ref r) => {
                let text = resolve_reference(r)?;
                append_text(&mut stack, &text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ThirtyBoxesError::Xml("unclosed element".to_string()));
    }
    root.ok_or_else(|| ThirtyBoxesError::Xml("empty document".to_string()))
}

fn element_from_start(e: &BytesStart) -> Result<Element, ThirtyBoxesError> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ThirtyBoxesError::Xml(format!("bad attribute: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| ThirtyBoxesError::Xml(format!("bad attribute value: {err}")))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(Element::new(tag, attrs))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    elem: Element,
) -> Result<(), ThirtyBoxesError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(elem);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(elem);
            Ok(())
        }
        None => Err(ThirtyBoxesError::Xml(
            "document has more than one root element".to_string(),
        )),
    }
}

/// Resolves a general entity reference: the predefined XML entities
/// plus decimal and hexadecimal character references.
fn resolve_reference(r: &[u8]) -> Result<String, ThirtyBoxesError> {
    let name = String::from_utf8_lossy(r);
    if let Some(code) = name.strip_prefix('#') {
        let code = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => code.parse(),
        };
        return code
            .ok()
            .and_then(char::from_u32)
            .map(|ch| ch.to_string())
            .ok_or_else(|| {
                ThirtyBoxesError::Xml(format!("bad character reference: &{name};"))
            });
    }
    match name.as_ref() {
        "amp" => Ok("&".to_string()),
        "lt" => Ok("<".to_string()),
        "gt" => Ok(">".to_string()),
        "apos" => Ok("'".to_string()),
        "quot" => Ok("\"".to_string()),
        _ => Err(ThirtyBoxesError::Xml(format!(
            "unknown entity reference: &{name};"
        ))),
    }
}

fn append_text(stack: &mut [Element], text: &str) {
    // Text before the root element is ignored.
    if let Some(top) = stack.last_mut() {
        match top.children.last_mut() {
            Some(child) => child.tail.push_str(text),
            None => top.text.push_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_builds_tree_with_attrs_and_text() {
        let root = parse(b"<rsp stat=\"ok\"><ping>pong</ping></rsp>").unwrap();
        assert_eq!(root.tag, "rsp");
        assert_eq!(root.attr("stat"), Some("ok"));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "ping");
        assert_eq!(root.children[0].text, "pong");
    }

    #[test]
    fn parse_keeps_tail_text_after_empty_elements() {
        let root = parse(b"<notes>line one<br/>line two<br/>line three</notes>").unwrap();
        assert_eq!(root.text, "line one");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tail, "line two");
        assert_eq!(root.children[1].tail, "line three");
    }

    #[test]
    fn parse_unescapes_entities() {
        let root = parse(b"<msg>bread &amp; butter</msg>").unwrap();
        assert_eq!(root.text, "bread & butter");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse(b"").is_err());
        assert!(parse(b"<rsp>").is_err());
    }
}
