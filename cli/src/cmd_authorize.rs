// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};

use thirtyboxes_api::ThirtyBoxes;

#[derive(Debug, Clone)]
pub struct CmdAuthorize {
    pub app_name: String,
    pub app_logo_url: Option<String>,
    pub return_url: Option<String>,
}

impl CmdAuthorize {
    pub const NAME: &str = "authorize";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Authorize a user, granting an auth token")
            .long_about(
                "Authorize a user. This opens a browser on the 30boxes authorization \
                 page, which provides an authorized user token once the user accepts. \
                 Pass the token to later calls via --auth-token, the \
                 THIRTYBOXES_AUTHTOKEN environment variable, or ~/.30boxes/authtoken.",
            )
            .arg(arg!(app_name: <APP_NAME> "Name of the application to authorize"))
            .arg(
                arg!(-l --"app-logo-url" <URL> "Application logo URL (max 150 chars)")
                    .required(false),
            )
            .arg(
                arg!(-r --"return-url" <URL> "Return URL to which authorization will redirect")
                    .required(false),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let app_name = matches
            .get_one::<String>("app_name")
            .expect("app_name is required")
            .clone();
        Self {
            app_name,
            app_logo_url: matches.get_one("app-logo-url").cloned(),
            return_url: matches.get_one("return-url").cloned(),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening the authorization page...");
        let url = api.authorize_url(
            &self.app_name,
            self.app_logo_url.as_deref(),
            self.return_url.as_deref(),
        )?;
        open_in_browser(url.as_str());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdGetApiKey;

impl CmdGetApiKey {
    pub const NAME: &str = "getapikey";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Get a 30boxes API key, necessary for using the rest of the API")
            .long_about(
                "Get a 30boxes API key. This opens a browser showing your API key once \
                 you have logged into your 30boxes.com account. Pass the key to later \
                 calls via --api-key, the THIRTYBOXES_APIKEY environment variable, or \
                 ~/.30boxes/apikey.",
            )
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening the API key page...");
        let url = api.api_key_url()?;
        open_in_browser(url.as_str());
        Ok(())
    }
}

fn open_in_browser(url: &str) {
    if open::that(url).is_err() {
        println!("Open this URL in your browser:\n{url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authorize() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdAuthorize::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "authorize",
                "My App",
                "--app-logo-url",
                "http://example.com/logo.png",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("authorize").unwrap();
        let parsed = CmdAuthorize::from(sub_matches);
        assert_eq!(parsed.app_name, "My App");
        assert_eq!(
            parsed.app_logo_url,
            Some("http://example.com/logo.png".to_string())
        );
        assert_eq!(parsed.return_url, None);
    }

    #[test]
    fn test_parse_getapikey() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdGetApiKey::command());

        let matches = cmd.try_get_matches_from(["test", "getapikey"]).unwrap();
        assert!(matches.subcommand_matches("getapikey").is_some());
    }
}
