// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the salon booking application: the month calendar, the sample catalog and the
//! controller that threads a booking through its screens.

mod appointment;
mod calendar;
mod catalog;
mod config;
mod error;
mod feedback;
mod flow;
mod prompt;
mod service;

pub use crate::appointment::{
    Appointment, AppointmentBook, AppointmentStatus, NotificationItem, PastAppointment,
};
pub use crate::calendar::{
    CalendarCell, DAYS_PER_WEEK, MonthGrid, WeekRow, YearMonth, build_month_grid, weekday_index,
};
pub use crate::catalog::{Branch, Catalog, Stylist, TimeSlot, default_time_slots};
pub use crate::config::{APP_NAME, Config, ReentryPolicy};
pub use crate::error::FlowError;
pub use crate::feedback::{FeedbackDraft, FeedbackSubmission, MAX_RATING};
pub use crate::flow::{
    BookingFlowController, BookingSelection, DatePicker, FlowSnapshot, NavTarget, Screen,
};
pub use crate::prompt::{AssumeYes, Notice, Prompter, Question};
pub use crate::service::{ServiceCategory, ServiceChoice, ServiceSelection};
