// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line and terminal interface of the salon booking application.

mod cli;
mod cmd_book;
mod cmd_calendar;
mod cmd_catalog;
mod cmd_generate_completion;
mod config;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
