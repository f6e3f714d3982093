// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front-end for the 30boxes.com calendar API.

mod arg;
mod cli;
mod cmd_authorize;
mod cmd_events;
mod cmd_generate_completion;
mod cmd_ping;
mod cmd_user;
mod event_formatter;
mod user_formatter;
mod util;

pub use crate::cli::{APP_NAME, Cli, Commands, run};
