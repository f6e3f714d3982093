// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};

use thirtyboxes_api::{DatePoint, ThirtyBoxes};

use crate::arg::CommonArgs;
use crate::event_formatter::{EventFormatter, EventHeader};
use crate::util::{OutputFormat, parse_date_point};

#[derive(Debug, Clone)]
pub struct CmdEvents {
    pub start: Option<String>,
    pub end: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEvents {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List all events in the given date range")
            .long_about(
                "List all events in the given date range. Returns events starting on or \
                 after START (defaults to today) and starting before END (defaults to \
                 START + 90 days). Dates are formatted as 'YYYY-MM-DD' and date-times \
                 as 'YYYY-MM-DD HH:MM:SS'.",
            )
            .arg(arg!(start: [START] "Start of the date range"))
            .arg(arg!(end: [END] "End of the date range"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            start: matches.get_one("start").cloned(),
            end: matches.get_one("end").cloned(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let start = parse_bound(self.start.as_deref())?;
        let end = parse_bound(self.end.as_deref())?;

        let response = api.events(start, end).await?;
        let formatter =
            EventFormatter::new(EventHeader::Range).with_output_format(self.output_format);
        println!("{}", formatter.format(&response));
        Ok(())
    }
}

fn parse_bound(bound: Option<&str>) -> Result<Option<DatePoint>, Box<dyn Error>> {
    match bound {
        Some(s) => Ok(Some(parse_date_point(s)?)),
        None => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub query: String,
    pub output_format: OutputFormat,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List all events matching the given query")
            .arg(arg!(query: <QUERY> "Free-text search query"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let query = matches
            .get_one::<String>("query")
            .expect("query is required")
            .clone();
        Self {
            query,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        let response = api.search(&self.query).await?;
        let formatter =
            EventFormatter::new(EventHeader::Search).with_output_format(self.output_format);
        println!("{}", formatter.format(&response));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTagSearch {
    pub tag: String,
    pub output_format: OutputFormat,
}

impl CmdTagSearch {
    pub const NAME: &str = "tagsearch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List all events tagged with the given tag")
            .arg(arg!(tag: <TAG> "Tag to search for"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let tag = matches
            .get_one::<String>("tag")
            .expect("tag is required")
            .clone();
        Self {
            tag,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, api: &ThirtyBoxes) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events by tag...");
        let response = api.tag_search(&self.tag).await?;
        let formatter =
            EventFormatter::new(EventHeader::TagSearch).with_output_format(self.output_format);
        println!("{}", formatter.format(&response));
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
    fn test_parse_events_without_bounds() {
        let matches = test_command(CmdEvents::command())
            .try_get_matches_from(["test", "events"])
            .unwrap();
        let parsed = CmdEvents::from(matches.subcommand_matches("events").unwrap());
        assert_eq!(parsed.start, None);
        assert_eq!(parsed.end, None);
    }

    #[test]
    fn test_parse_events_with_bounds() {
        let matches = test_command(CmdEvents::command())
            .try_get_matches_from(["test", "events", "2006-02-01", "2006-03-01"])
            .unwrap();
        let parsed = CmdEvents::from(matches.subcommand_matches("events").unwrap());
        assert_eq!(parsed.start, Some("2006-02-01".to_string()));
        assert_eq!(parsed.end, Some("2006-03-01".to_string()));
    }

    #[test]
    fn test_parse_search() {
        let matches = test_command(CmdSearch::command())
            .try_get_matches_from(["test", "search", "bike to work"])
            .unwrap();
        let parsed = CmdSearch::from(matches.subcommand_matches("search").unwrap());
        assert_eq!(parsed.query, "bike to work");
    }

    #[test]
    fn test_parse_tagsearch() {
        let matches = test_command(CmdTagSearch::command())
            .try_get_matches_from(["test", "tagsearch", "work", "--output-format", "short"])
            .unwrap();
        let parsed = CmdTagSearch::from(matches.subcommand_matches("tagsearch").unwrap());
        assert_eq!(parsed.tag, "work");
        assert_eq!(parsed.output_format, OutputFormat::Short);
    }
}
