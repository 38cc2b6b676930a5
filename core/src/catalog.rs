// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::de;

use crate::ServiceCategory;

/// A salon branch customers can book at.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub phone_number: String,
    pub address: String,

    /// Opening hours, one line per group of days.
    pub hours: String,
}

/// A stylist working at the salon.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Stylist {
    pub id: u32,
    pub name: String,
}

/// A bookable start time, displayed like "01:00 PM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Creates a slot at the given hour and minute, `None` if the time is invalid.
    pub fn from_hm(hour: u32, min: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, 0).map(Self)
    }

    /// The time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeSlot {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%I:%M %p"))
    }
}

impl FromStr for TimeSlot {
    type Err = chrono::ParseError;

    /// Accepts both "13:00" and "01:00 PM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%I:%M %p"))
            .map(Self)
    }
}

impl serde::Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeSlotVisitor;

        impl<'de> de::Visitor<'de> for TimeSlotVisitor {
            type Value = TimeSlot;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a time string like "13:00" or "01:00 PM""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|e| de::Error::custom(format!("invalid time slot {value:?}: {e}")))
            }
        }

        deserializer.deserialize_str(TimeSlotVisitor)
    }
}

/// The default bookable slots of a day.
pub fn default_time_slots() -> Vec<TimeSlot> {
    [(10, 0), (12, 0), (13, 0), (15, 0), (16, 0), (17, 0)]
        .into_iter()
        .map(|(h, m)| TimeSlot(NaiveTime::from_hms_opt(h, m, 0).expect("valid time")))
        .collect()
}

/// Everything a customer can choose from while booking.
#[derive(Debug, Clone)]
pub struct Catalog {
    branches: Vec<Branch>,
    stylists: Vec<Stylist>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    /// Creates the sample catalog with the given time slots.
    pub fn with_time_slots(time_slots: Vec<TimeSlot>) -> Self {
        Self {
            branches: sample_branches(),
            stylists: sample_stylists(),
            time_slots,
        }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn stylists(&self) -> &[Stylist] {
        &self.stylists
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// The service categories with their options.
    pub fn services(&self) -> impl Iterator<Item = (ServiceCategory, &'static [&'static str])> {
        ServiceCategory::ALL.into_iter().map(|c| (c, c.options()))
    }

    /// Looks up a branch by id.
    pub fn branch(&self, id: u32) -> Option<&Branch> {
        self.branches.iter().find(|a| a.id == id)
    }

    /// Looks up a stylist by id.
    pub fn stylist(&self, id: u32) -> Option<&Stylist> {
        self.stylists.iter().find(|a| a.id == id)
    }

    /// Whether the slot is offered.
    pub fn has_time_slot(&self, slot: TimeSlot) -> bool {
        self.time_slots.contains(&slot)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_time_slots(default_time_slots())
    }
}

fn sample_branches() -> Vec<Branch> {
    vec![
        Branch {
            id: 1,
            name: "Cheras Branch".to_string(),
            phone_number: "03-72841935".to_string(),
            address: "Lot 3A, Jalan Perniagaan Cheras 2, Pusat Perniagaan Cheras, 56100 Kuala Lumpur"
                .to_string(),
            hours: "Tue to Sun | 10am-2pm & 3pm-7pm\nMon | Closed".to_string(),
        },
        Branch {
            id: 2,
            name: "Bangsar Branch".to_string(),
            phone_number: "03-22019876".to_string(),
            address: "12, Jalan Telawi 3, Bangsar, 59100 Kuala Lumpur".to_string(),
            hours: "Mon to Sat | 10am-8pm\nSun | Closed".to_string(),
        },
    ]
}

fn sample_stylists() -> Vec<Stylist> {
    ["Jackson", "Minnie", "Winter", "Leo"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Stylist {
            id,
            name: name.to_string(),
        })
        .collect()
}
