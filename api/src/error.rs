// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// 30boxes client errors.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThirtyBoxesError {
    /// The remote API signaled failure in the response envelope.
    #[error("[error {code}] {message}")]
    Api {
        /// Numeric error code from the `err` record.
        code: i64,
        /// Human-readable message from the `err` record.
        message: String,
    },

    /// A response element has no entry in the active decode table.
    ///
    /// Indicates an API/client version mismatch; never silently skipped.
    #[error("unknown {family} tag: {tag:?}")]
    UnknownTag {
        /// Name of the decode table in effect.
        family: &'static str,
        /// Tag of the unrecognized element.
        tag: String,
    },

    /// A known element carries text its decoder cannot interpret.
    #[error("<{tag}>: could not decode {text:?}: expected {expected}")]
    Malformed {
        /// Tag of the offending element.
        tag: String,
        /// Raw text that failed to decode.
        text: String,
        /// What the decoder expected to find.
        expected: &'static str,
    },

    /// The response document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// The response envelope violates the documented shape.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration error (usually a missing credential).
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ThirtyBoxesError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<quick_xml::Error> for ThirtyBoxesError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}
