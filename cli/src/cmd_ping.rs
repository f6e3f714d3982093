// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};

use thirtyboxes_api::{ThirtyBoxes, Value};

use crate::arg::CommonArgs;
use crate::util::{OutputFormat, to_raw};

#[derive(Debug, Clone, Copy)]
pub struct CmdPing {
    pub output_format: OutputFormat,
}

impl CmdPing {
    pub const NAME: &str = "ping";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Ping the 30boxes API, verifying your API key")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "pinging the API...");
        let response = api.ping().await?;
        match self.output_format {
            OutputFormat::Raw => println!("{}", to_raw(&response)),
            OutputFormat::Short | OutputFormat::Long => println!(
                "{}: {}",
                response.get("ping").and_then(Value::as_str).unwrap_or("pong"),
                response.get("msg").and_then(Value::as_str).unwrap_or_default(),
            ),
        }
        Ok(())
    }
}
