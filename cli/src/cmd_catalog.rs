// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use colored::Color;
use salonbook_core::{Branch, Catalog, ServiceCategory, Stylist, TimeSlot};

use crate::config::Config;
use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

/// Print what the salon offers.
#[derive(Debug, Clone, Copy)]
pub struct CmdCatalog {
    pub topic: CatalogTopic,
    pub category: Option<ServiceCategory>,
    pub output_format: ArgOutputFormat,
}

impl CmdCatalog {
    pub const NAME: &str = "catalog";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List branches, stylists, time slots or services")
            .arg(
                arg!(topic: <TOPIC> "What to list")
                    .value_parser(value_parser!(CatalogTopic)),
            )
            .arg(
                arg!(--category <CATEGORY> "Only list the services of this category")
                    .value_parser(value_parser!(ServiceCategory)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            topic: matches
                .get_one::<CatalogTopic>("topic")
                .copied()
                .unwrap_or(CatalogTopic::Branches),
            category: matches.get_one::<ServiceCategory>("category").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing catalog...");
        let catalog = Catalog::with_time_slots(config.core.time_slots.clone());
        self.write_to(&catalog, &mut io::stdout().lock())
    }

    fn write_to(self, catalog: &Catalog, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => {
                let mut w = &mut *w;
                match self.topic {
                    CatalogTopic::Branches => serde_json::to_writer_pretty(&mut w, catalog.branches()),
                    CatalogTopic::Stylists => serde_json::to_writer_pretty(&mut w, catalog.stylists()),
                    CatalogTopic::Slots => serde_json::to_writer_pretty(&mut w, catalog.time_slots()),
                    CatalogTopic::Services => {
                        serde_json::to_writer_pretty(&mut w, &service_rows(catalog, self.category))
                    }
                }?;
                writeln!(w)?;
                Ok(())
            }
            ArgOutputFormat::Table => match self.topic {
                CatalogTopic::Branches => {
                    use BranchColumn::*;
                    Table::new(vec![Id, Name, Phone, Hours], catalog.branches()).write_to(w)
                }
                CatalogTopic::Stylists => {
                    use StylistColumn::*;
                    Table::new(vec![Id, Name], catalog.stylists()).write_to(w)
                }
                CatalogTopic::Slots => Table::new(vec![SlotColumn], catalog.time_slots()).write_to(w),
                CatalogTopic::Services => {
                    let rows = service_rows(catalog, self.category);
                    let columns = vec![ServiceColumn::Category, ServiceColumn::Option];
                    Table::new(columns, &rows).write_to(w)
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogTopic {
    Branches,
    Stylists,
    Slots,
    Services,
}

#[derive(Debug, serde::Serialize)]
struct ServiceRow {
    category: String,
    option: &'static str,
}

fn service_rows(catalog: &Catalog, only: Option<ServiceCategory>) -> Vec<ServiceRow> {
    catalog
        .services()
        .filter(|(category, _)| only.is_none_or(|a| a == *category))
        .flat_map(|(category, options)| {
            options.iter().map(move |&option| ServiceRow {
                category: category.to_string(),
                option,
            })
        })
        .collect()
}

enum BranchColumn {
    Id,
    Name,
    Phone,
    Hours,
}

impl Column<Branch> for BranchColumn {
    fn format(&self, data: &Branch) -> String {
        match self {
            BranchColumn::Id => format!("#{}", data.id),
            BranchColumn::Name => data.name.clone(),
            BranchColumn::Phone => data.phone_number.clone(),
            BranchColumn::Hours => data.hours.replace('\n', "; "),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            BranchColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _data: &Branch) -> Option<Color> {
        match self {
            BranchColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

enum StylistColumn {
    Id,
    Name,
}

impl Column<Stylist> for StylistColumn {
    fn format(&self, data: &Stylist) -> String {
        match self {
            StylistColumn::Id => format!("#{}", data.id),
            StylistColumn::Name => data.name.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            StylistColumn::Id => PaddingDirection::Right,
            StylistColumn::Name => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _data: &Stylist) -> Option<Color> {
        match self {
            StylistColumn::Id => Some(Color::BrightBlack),
            StylistColumn::Name => None,
        }
    }
}

struct SlotColumn;

impl Column<TimeSlot> for SlotColumn {
    fn format(&self, data: &TimeSlot) -> String {
        data.to_string()
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &TimeSlot) -> Option<Color> {
        None
    }
}

enum ServiceColumn {
    Category,
    Option,
}

impl Column<ServiceRow> for ServiceColumn {
    fn format(&self, data: &ServiceRow) -> String {
        match self {
            ServiceColumn::Category => data.category.clone(),
            ServiceColumn::Option => data.option.to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &ServiceRow) -> Option<Color> {
        match self {
            ServiceColumn::Category => Some(Color::Cyan),
            ServiceColumn::Option => None,
        }
    }
}
