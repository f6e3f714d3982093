// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString};

use clap::{ArgMatches, Command, builder::styling, crate_version};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};

use thirtyboxes_api::{ApiConfig, ThirtyBoxes, resolve_api_key, resolve_auth_token};

use crate::arg::CommonArgs;
use crate::cmd_authorize::{CmdAuthorize, CmdGetApiKey};
use crate::cmd_events::{CmdEvents, CmdSearch, CmdTagSearch};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_ping::CmdPing;
use crate::cmd_user::{CmdAllUserInfo, CmdUser};

/// Name of the command-line binary.
pub const APP_NAME: &str = "30boxes";

/// Run the 30boxes command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Explicit API key override
    pub api_key: Option<String>,

    /// Explicit auth token override
    pub auth_token: Option<String>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("30boxes.com calendar API client")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(CommonArgs::api_key())
            .arg(CommonArgs::auth_token())
            .arg(CommonArgs::output_format())
            .subcommand(CmdPing::command())
            .subcommand(CmdUser::command())
            .subcommand(CmdAuthorize::command())
            .subcommand(CmdGetApiKey::command())
            .subcommand(CmdAllUserInfo::command())
            .subcommand(CmdEvents::command())
            .subcommand(CmdSearch::command())
            .subcommand(CmdTagSearch::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdPing::NAME, matches)) => Ping(CmdPing::from(matches)),
            Some((CmdUser::NAME, matches)) => User(CmdUser::from(matches)),
            Some((CmdAuthorize::NAME, matches)) => Authorize(CmdAuthorize::from(matches)),
            Some((CmdGetApiKey::NAME, matches)) => GetApiKey(CmdGetApiKey::from(matches)),
            Some((CmdAllUserInfo::NAME, matches)) => AllUserInfo(CmdAllUserInfo::from(matches)),
            Some((CmdEvents::NAME, matches)) => Events(CmdEvents::from(matches)),
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdTagSearch::NAME, matches)) => TagSearch(CmdTagSearch::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let api_key = CommonArgs::get_api_key(&matches);
        let auth_token = CommonArgs::get_auth_token(&matches);
        Ok(Cli {
            api_key,
            auth_token,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.api_key, self.auth_token).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Ping the API
    Ping(CmdPing),

    /// Get public info for a user
    User(CmdUser),

    /// Authorize a user
    Authorize(CmdAuthorize),

    /// Get an API key
    GetApiKey(CmdGetApiKey),

    /// Get all info on the authorized user
    AllUserInfo(CmdAllUserInfo),

    /// List events in a date range
    Events(CmdEvents),

    /// Free-text search over events
    Search(CmdSearch),

    /// Tag search over events
    TagSearch(CmdTagSearch),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given credential overrides
    #[rustfmt::skip]
    pub async fn run(
        self,
        api_key: Option<String>,
        auth_token: Option<String>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Ping(a)        => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            User(a)        => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            Authorize(a)   => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            GetApiKey(a)   => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            AllUserInfo(a) => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            Events(a)      => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            Search(a)      => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            TagSearch(a)   => Self::run_with(api_key, auth_token, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        api_key: Option<String>,
        auth_token: Option<String>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a ThirtyBoxes) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("resolving credentials...");
        let config = ApiConfig {
            api_key: resolve_api_key(api_key).await,
            auth_token: resolve_auth_token(auth_token).await,
            ..Default::default()
        };
        let api = ThirtyBoxes::new(config)?;

        f(&api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::OutputFormat;

    #[test]
    fn test_parse_ping() {
        let cli = Cli::try_parse_from(vec!["test", "ping"]).unwrap();
        assert!(matches!(cli.command, Commands::Ping(_)));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test"]).is_err());
    }

    #[test]
    fn test_parse_global_credentials() {
        let cli = Cli::try_parse_from(vec![
            "test",
            "ping",
            "--api-key",
            "my-key",
            "--auth-token",
            "my-token",
        ])
        .unwrap();
        assert_eq!(cli.api_key, Some("my-key".to_string()));
        assert_eq!(cli.auth_token, Some("my-token".to_string()));
    }

    #[test]
    fn test_parse_user() {
        let cli = Cli::try_parse_from(vec!["test", "user", "1741"]).unwrap();
        match cli.command {
            Commands::User(cmd) => assert_eq!(cmd.email_or_id, "1741"),
            _ => panic!("Expected User command"),
        }
    }

    #[test]
    fn test_parse_authorize() {
        let cli = Cli::try_parse_from(vec!["test", "authorize", "My App"]).unwrap();
        match cli.command {
            Commands::Authorize(cmd) => assert_eq!(cmd.app_name, "My App"),
            _ => panic!("Expected Authorize command"),
        }
    }

    #[test]
    fn test_parse_getapikey() {
        let cli = Cli::try_parse_from(vec!["test", "getapikey"]).unwrap();
        assert!(matches!(cli.command, Commands::GetApiKey(_)));
    }

    #[test]
    fn test_parse_alluserinfo() {
        let cli = Cli::try_parse_from(vec!["test", "alluserinfo"]).unwrap();
        assert!(matches!(cli.command, Commands::AllUserInfo(_)));
    }

    #[test]
    fn test_parse_events_with_range_and_format() {
        let cli = Cli::try_parse_from(vec![
            "test",
            "events",
            "2006-02-01",
            "2006-03-01",
            "--output-format",
            "raw",
        ])
        .unwrap();
        match cli.command {
            Commands::Events(cmd) => {
                assert_eq!(cmd.start, Some("2006-02-01".to_string()));
                assert_eq!(cmd.end, Some("2006-03-01".to_string()));
                assert_eq!(cmd.output_format, OutputFormat::Raw);
            }
            _ => panic!("Expected Events command"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(vec!["test", "search", "bike"]).unwrap();
        match cli.command {
            Commands::Search(cmd) => assert_eq!(cmd.query, "bike"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_parse_tagsearch_short_format() {
        let cli = Cli::try_parse_from(vec![
            "test",
            "--output-format",
            "short",
            "tagsearch",
            "work",
        ])
        .unwrap();
        match cli.command {
            Commands::TagSearch(cmd) => {
                assert_eq!(cmd.tag, "work");
                assert_eq!(cmd.output_format, OutputFormat::Short);
            }
            _ => panic!("Expected TagSearch command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let cli = Cli::try_parse_from(vec!["test", "generate-completion", "zsh"]).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
