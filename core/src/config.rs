// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;

use crate::catalog::default_time_slots;
use crate::TimeSlot;

/// The name of the salon booking application.
pub const APP_NAME: &str = "salon";

/// Configuration for the salon booking application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// What to do with an unfinished booking when a new one is started.
    #[serde(default)]
    pub reentry_policy: ReentryPolicy,

    /// Pins the current day, the local date is used if unset.
    #[serde(default)]
    pub today: Option<NaiveDate>,

    /// Bookable start times of a day.
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<TimeSlot>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.time_slots.sort();
        self.time_slots.dedup();
        if self.time_slots.is_empty() {
            return Err("At least one time slot must be configured".into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reentry_policy: ReentryPolicy::default(),
            today: None,
            time_slots: default_time_slots(),
        }
    }
}

/// How "book appointment" treats a selection left over from an abandoned booking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReentryPolicy {
    /// Start every booking from scratch.
    #[default]
    Discard,

    /// Keep the previous choices as the starting point.
    Resume,
}
