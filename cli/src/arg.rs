// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn api_key() -> Arg {
        arg!(-k --"api-key" <KEY> "30boxes API key")
            .required(false)
            .global(true)
    }

    pub fn get_api_key(matches: &ArgMatches) -> Option<String> {
        matches.get_one("api-key").cloned()
    }

    pub fn auth_token() -> Arg {
        arg!(-a --"auth-token" <TOKEN> "30boxes authorized user token")
            .required(false)
            .global(true)
    }

    pub fn get_auth_token(matches: &ArgMatches) -> Option<String> {
        matches.get_one("auth-token").cloned()
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("long")
            .global(true)
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Long)
    }
}
