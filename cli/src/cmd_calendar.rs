// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use salonbook_core::{CalendarCell, DAYS_PER_WEEK, MonthGrid, YearMonth};

use crate::config::Config;
use crate::util::parse_date;

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Print the grid of a month.
#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub month: Option<YearMonth>,
    pub selected: Option<NaiveDate>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a month calendar, past days are not bookable")
            .arg(
                arg!([MONTH] "Month to show in YYYY-MM format, defaults to the current month")
                    .value_parser(|s: &str| s.parse::<YearMonth>()),
            )
            .arg(
                arg!(--selected <DATE> "Highlight a date in YYYY-MM-DD format")
                    .value_parser(parse_date),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: matches.get_one::<YearMonth>("MONTH").copied(),
            selected: matches.get_one::<NaiveDate>("selected").copied(),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing calendar...");
        let today = config.core.today.unwrap_or_else(|| Local::now().date_naive());
        self.write_to(today, &mut io::stdout().lock())
    }

    fn write_to(self, today: NaiveDate, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let selected = self.selected.unwrap_or(today);
        let month = self
            .month
            .or_else(|| self.selected.map(YearMonth::from_date))
            .unwrap_or_else(|| YearMonth::from_date(today));

        let grid = MonthGrid::build(month, today, selected);
        writeln!(w, "{:^width$}", month.title(), width = WEEKDAY_HEADER.len())?;
        writeln!(w, "{}", WEEKDAY_HEADER.bold())?;
        for row in grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_ref().map_or_else(|| "  ".to_string(), format_cell))
                .collect();
            debug_assert_eq!(cells.len(), DAYS_PER_WEEK);
            writeln!(w, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

fn format_cell(cell: &CalendarCell) -> String {
    let day = format!("{:>2}", cell.day);
    if cell.is_selected {
        day.green().bold().underline().to_string()
    } else if cell.is_today {
        day.reversed().to_string()
    } else if cell.is_past {
        day.dimmed().to_string()
    } else {
        day
    }
}
