// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decode tables: tag name to decoding rule, one table per response family.

/// How a known element decodes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldKind {
    /// Pass-through text content.
    Text,
    /// Base-10 integer of the whole text.
    Int,
    /// Boolean from integer text (`0`/absent false, non-zero true).
    Bool,
    /// `YYYY-MM-DD`; the `0000-00-00` sentinel means not applicable.
    Date,
    /// `YYYY-MM-DD HH:MM:SS`, falling back to a plain date when the
    /// time part is absent; same sentinel handling.
    DateTime,
    /// Free text with embedded `<br/>` line breaks to re-linearize.
    Notes,
    /// Map of child tag to child value, with the given repeated-sibling
    /// accumulation rules.
    Composite(&'static [Grouping]),
}

/// How repeated children of one tag accumulate inside a composite.
///
/// The child-to-key mapping is an explicit table: the API's shapes use
/// irregular plurals (`buddy` to `buddies`) and one type-keyed map, so
/// nothing here is derived from a naming convention.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Grouping {
    /// Child tag the rule applies to.
    pub child: &'static str,
    /// Key the accumulated children live under.
    pub key: &'static str,
    /// Accumulation mode.
    pub how: Accumulate,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Accumulate {
    /// Document-order sequence.
    List,
    /// Map keyed by each child's `type` field, holding its `username`.
    TypedMap,
}

/// A decode table for one response family.
///
/// Tags absent from the table are a hard error during decoding, never a
/// silent pass-through. The envelope (`rsp`) and the error record
/// (`err`) are common to every family and handled by the decoder
/// itself.
#[derive(Debug, Clone, Copy)]
pub struct DecodeTable {
    name: &'static str,
    fields: &'static [(&'static str, FieldKind)],
}

impl DecodeTable {
    /// The response family this table decodes (`ping`, `user`, `events`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn kind_of(&self, tag: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }
}

const NO_GROUPS: &[Grouping] = &[];

const USER_GROUPS: &[Grouping] = &[
    Grouping {
        child: "feed",
        key: "feeds",
        how: Accumulate::List,
    },
    Grouping {
        child: "email",
        key: "emails",
        how: Accumulate::List,
    },
    Grouping {
        child: "buddy",
        key: "buddies",
        how: Accumulate::List,
    },
    Grouping {
        child: "IM",
        key: "IM",
        how: Accumulate::TypedMap,
    },
];

const EVENT_LIST_GROUPS: &[Grouping] = &[Grouping {
    child: "event",
    key: "events",
    how: Accumulate::List,
}];

/// Decode table for `test.Ping` responses.
pub static PING: DecodeTable = DecodeTable {
    name: "ping",
    fields: &[("ping", FieldKind::Text), ("msg", FieldKind::Text)],
};

/// Decode table for `user.FindByEmail`, `user.FindById`, and
/// `user.GetAllInfo` responses.
pub static USER: DecodeTable = DecodeTable {
    name: "user",
    fields: &[
        ("user", FieldKind::Composite(USER_GROUPS)),
        ("buddy", FieldKind::Composite(USER_GROUPS)),
        ("feed", FieldKind::Composite(NO_GROUPS)),
        ("email", FieldKind::Composite(NO_GROUPS)),
        ("IM", FieldKind::Composite(NO_GROUPS)),
        ("id", FieldKind::Int),
        ("facebookId", FieldKind::Int),
        ("status", FieldKind::Text),
        ("dateFormat", FieldKind::Text),
        ("bio", FieldKind::Text),
        ("timeZone", FieldKind::Text),
        ("firstName", FieldKind::Text),
        ("lastName", FieldKind::Text),
        ("avatar", FieldKind::Text),
        ("createDate", FieldKind::Date),
        ("startDay", FieldKind::Int),
        ("use24HourClock", FieldKind::Bool),
        ("personalSite", FieldKind::Text),
        ("name", FieldKind::Text),
        ("url", FieldKind::Text),
        ("type", FieldKind::Text),
        ("username", FieldKind::Text),
        ("address", FieldKind::Text),
        ("primary", FieldKind::Bool),
    ],
};

/// Decode table for `events.Get`, `events.Search`, and
/// `events.TagSearch` responses.
pub static EVENTS: DecodeTable = DecodeTable {
    name: "events",
    fields: &[
        ("eventList", FieldKind::Composite(EVENT_LIST_GROUPS)),
        ("event", FieldKind::Composite(NO_GROUPS)),
        ("invitation", FieldKind::Composite(NO_GROUPS)),
        ("userId", FieldKind::Int),
        ("search", FieldKind::Text),
        ("tagSearch", FieldKind::Text),
        ("listStart", FieldKind::DateTime),
        ("listEnd", FieldKind::DateTime),
        ("id", FieldKind::Int),
        ("summary", FieldKind::Text),
        ("notes", FieldKind::Notes),
        ("start", FieldKind::DateTime),
        ("end", FieldKind::DateTime),
        ("allDayEvent", FieldKind::Bool),
        ("repeatType", FieldKind::Text),
        ("repeatEndDate", FieldKind::DateTime),
        ("repeatSkipDates", FieldKind::Text),
        ("repeatICal", FieldKind::Text),
        ("reminder", FieldKind::Text),
        ("tags", FieldKind::Text),
        ("privacy", FieldKind::Text),
        ("isInvitation", FieldKind::Bool),
        ("lastUpdate", FieldKind::Text),
        ("externalUID", FieldKind::Text),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_tags() {
        assert!(PING.kind_of("ping").is_some());
        assert!(USER.kind_of("use24HourClock").is_some());
        assert!(EVENTS.kind_of("repeatEndDate").is_some());
    }

    #[test]
    fn lookup_rejects_unknown_tags() {
        assert!(PING.kind_of("user").is_none());
        assert!(USER.kind_of("eventList").is_none());
        assert!(EVENTS.kind_of("feed").is_none());
    }
}
