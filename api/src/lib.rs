// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client binding for the 30boxes.com calendar API.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

mod client;
mod config;
mod credentials;
mod decode;
mod error;
mod http;
mod request;
mod table;
mod types;
mod value;
mod xml;

pub use crate::client::ThirtyBoxes;
pub use crate::config::{API_URL, ApiConfig};
pub use crate::credentials::{
    APIKEY_ENV, AUTHTOKEN_ENV, resolve_api_key, resolve_auth_token,
};
pub use crate::decode::decode;
pub use crate::error::ThirtyBoxesError;
pub use crate::table::{DecodeTable, EVENTS, PING, USER};
pub use crate::types::{ApiKey, AuthToken, DatePoint};
pub use crate::value::Value;
