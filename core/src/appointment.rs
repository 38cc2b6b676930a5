// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{BookingSelection, TimeSlot};

/// The review state of an appointment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Accepted by the salon.
    Approved,

    /// Waiting for the salon to review.
    #[default]
    Pending,

    /// Declined by the salon.
    Rejected,
}

const STATUS_APPROVED: &str = "Approved";
const STATUS_PENDING: &str = "Pending";
const STATUS_REJECTED: &str = "Rejected";

impl AsRef<str> for AppointmentStatus {
    fn as_ref(&self) -> &str {
        match self {
            AppointmentStatus::Approved => STATUS_APPROVED,
            AppointmentStatus::Pending => STATUS_PENDING,
            AppointmentStatus::Rejected => STATUS_REJECTED,
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_APPROVED => Ok(AppointmentStatus::Approved),
            STATUS_PENDING => Ok(AppointmentStatus::Pending),
            STATUS_REJECTED => Ok(AppointmentStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// An upcoming appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub branch: String,
    pub stylist: String,

    /// Service labels, category names followed by the picked option.
    pub services: Vec<String>,

    pub status: AppointmentStatus,
}

impl Appointment {
    /// Builds a pending appointment from a complete selection, `None` if any field is missing.
    pub(crate) fn from_selection(id: String, selection: &BookingSelection) -> Option<Self> {
        Some(Self {
            id,
            date: selection.date?,
            time: selection.time?,
            branch: selection.branch.as_ref()?.name.clone(),
            stylist: selection.stylist.as_ref()?.name.clone(),
            services: selection.services.labels(),
            status: AppointmentStatus::Pending,
        })
    }

    /// Services joined for display, like "Color | Touch Up".
    pub fn summary(&self) -> String {
        self.services.join(" | ")
    }
}

/// A finished appointment, can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastAppointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub branch: String,
    pub stylist: String,
    pub services: Vec<String>,
}

impl PastAppointment {
    /// Services joined for display.
    pub fn summary(&self) -> String {
        self.services.join(" | ")
    }
}

/// A message about an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub title: String,
    pub subtitle: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub branch: String,
    pub stylist: String,
    pub service: String,
    pub is_cancelled: bool,
}

/// Appointments and notifications of the signed-in customer.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    upcoming: Vec<Appointment>,
    past: Vec<PastAppointment>,
    notifications: Vec<NotificationItem>,
}

impl AppointmentBook {
    /// Creates a book with the given content.
    pub fn new(
        upcoming: Vec<Appointment>,
        past: Vec<PastAppointment>,
        notifications: Vec<NotificationItem>,
    ) -> Self {
        Self {
            upcoming,
            past,
            notifications,
        }
    }

    /// The demo data shown on a fresh session.
    pub fn sample() -> Self {
        let noon = TimeSlot::from_hm(12, 0).expect("valid time");
        let bangsar = || "Bangsar Branch".to_string();
        let jackson = || "Jackson".to_string();
        let strings = |a: &[&str]| a.iter().map(ToString::to_string).collect::<Vec<_>>();

        let upcoming = vec![Appointment {
            id: "1".to_string(),
            date: ymd(2025, 8, 17),
            time: noon,
            branch: bangsar(),
            stylist: jackson(),
            services: strings(&["Color", "Touch Up"]),
            status: AppointmentStatus::Approved,
        }];

        let past = [
            ("1", ymd(2025, 7, 11), &["Cut", "Styling", "Wash and Styling"][..]),
            ("2", ymd(2025, 5, 14), &["Cut", "Color", "Touch Up"][..]),
            (
                "3",
                ymd(2025, 1, 5),
                &["Color", "Medium", "Hair Treatment", "Scalp Only"][..],
            ),
        ]
        .into_iter()
        .map(|(id, date, services)| PastAppointment {
            id: id.to_string(),
            date,
            time: noon,
            branch: bangsar(),
            stylist: jackson(),
            services: strings(services),
        })
        .collect();

        let notifications = vec![
            NotificationItem {
                title: "Booking Cancelled:".to_string(),
                subtitle: "Due to bad weather".to_string(),
                date: ymd(2025, 8, 20),
                time: noon,
                branch: bangsar(),
                stylist: jackson(),
                service: "Color | Touch Up".to_string(),
                is_cancelled: true,
            },
            NotificationItem {
                title: "Booking Reminder:".to_string(),
                subtitle: "Your Appointment Tomorrow".to_string(),
                date: ymd(2025, 8, 17),
                time: noon,
                branch: bangsar(),
                stylist: jackson(),
                service: "Color | Touch Up".to_string(),
                is_cancelled: false,
            },
        ];

        Self::new(upcoming, past, notifications)
    }

    pub fn upcoming(&self) -> &[Appointment] {
        &self.upcoming
    }

    pub fn past(&self) -> &[PastAppointment] {
        &self.past
    }

    pub fn notifications(&self) -> &[NotificationItem] {
        &self.notifications
    }

    /// Looks up an upcoming appointment.
    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.upcoming.iter().find(|a| a.id == id)
    }

    /// Looks up a past appointment.
    pub fn past_appointment(&self, id: &str) -> Option<&PastAppointment> {
        self.past.iter().find(|a| a.id == id)
    }

    pub(crate) fn add(&mut self, appointment: Appointment) {
        self.upcoming.push(appointment);
    }

    /// Removes an upcoming appointment, returns it if it existed.
    pub(crate) fn cancel(&mut self, id: &str) -> Option<Appointment> {
        let index = self.upcoming.iter().position(|a| a.id == id)?;
        Some(self.upcoming.remove(index))
    }
}

/// Labels of the selected services, the category name precedes the option unless both are equal.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
