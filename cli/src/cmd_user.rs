// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};

use thirtyboxes_api::ThirtyBoxes;

use crate::arg::CommonArgs;
use crate::user_formatter::UserFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdUser {
    pub email_or_id: String,
    pub output_format: OutputFormat,
}

impl CmdUser {
    pub const NAME: &str = "user";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Get public info for the given user")
            .long_about(
                "Get public info for the given user. A numeric argument looks the user \
                 up by id, anything else by email address.",
            )
            .arg(arg!(user: <EMAIL_OR_ID> "Email address or numeric id of the user"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let email_or_id = matches
            .get_one::<String>("user")
            .expect("user is required")
            .clone();
        Self {
            email_or_id,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "looking up user...");
        let user = api.find_user(&self.email_or_id).await?;
        let formatter = UserFormatter::new(self.output_format);
        println!("{}", formatter.format(&user));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdAllUserInfo {
    pub output_format: OutputFormat,
}

impl CmdAllUserInfo {
    pub const NAME: &str = "alluserinfo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Get all info on the authorized user")
            .long_about(
                "Get all info on the authorized user. See `30boxes help authorize` for \
                 information on authorizing a user.",
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching all user info...");
        let user = api.all_user_info().await?;
        let formatter = UserFormatter::new(self.output_format);
        println!("{}", formatter.format(&user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_command(sub: Command) -> Command {
        Command::new("test")
            .arg(CommonArgs::output_format())
            .subcommand_required(true)
            .subcommand(sub)
    }

    #[test]
    fn test_parse_user() {
        let matches = test_command(CmdUser::command())
            .try_get_matches_from(["test", "user", "trent@example.com"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("user").unwrap();
        let parsed = CmdUser::from(sub_matches);
        assert_eq!(parsed.email_or_id, "trent@example.com");
    }

    #[test]
    fn test_parse_user_requires_argument() {
        let result = test_command(CmdUser::command()).try_get_matches_from(["test", "user"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_alluserinfo() {
        let matches = test_command(CmdAllUserInfo::command())
            .try_get_matches_from(["test", "alluserinfo"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("alluserinfo").unwrap();
        let parsed = CmdAllUserInfo::from(sub_matches);
        assert_eq!(parsed.output_format, OutputFormat::Long);
    }
}
