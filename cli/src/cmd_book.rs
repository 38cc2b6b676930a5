// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use salonbook_core::{Config as CoreConfig, ReentryPolicy};

use crate::config::Config;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CmdBook {
    /// Overrides `[core] reentry_policy` of the config file.
    pub reentry_policy: Option<ReentryPolicy>,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the booking app, the default command")
            .arg(
                arg!(--"reentry-policy" <POLICY> "Whether a new booking keeps an unfinished one")
                    .value_parser(value_parser!(ReentryPolicy)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            reentry_policy: matches.get_one::<ReentryPolicy>("reentry-policy").copied(),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening booking app...");
        crate::tui::run_booking(&self.core_config(config))
    }

    fn core_config(self, config: &Config) -> CoreConfig {
        let mut core = config.core.clone();
        if let Some(policy) = self.reentry_policy {
            core.reentry_policy = policy;
        }
        core
    }
}
