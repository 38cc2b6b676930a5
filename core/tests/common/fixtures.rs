// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helpers to create configurations and controllers pinned to a fixed
//! day, and to drive a controller to a given booking step.

use chrono::NaiveDate;
use salonbook_core::{
    BookingFlowController, Config, ReentryPolicy, Screen, ServiceCategory, ServiceChoice,
    TimeSlot, default_time_slots,
};

use crate::common::ScriptedPrompter;

/// The pinned "today" of every test controller, a Friday.
pub const TODAY: (i32, u32, u32) = (2025, 8, 15);

/// Shorthand for a calendar date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shorthand for a time slot.
#[must_use]
pub fn slot(hour: u32, min: u32) -> TimeSlot {
    TimeSlot::from_hm(hour, min).unwrap()
}

/// Creates a configuration pinned to [`TODAY`].
#[must_use]
pub fn test_config(policy: ReentryPolicy) -> Config {
    let (y, m, d) = TODAY;
    Config {
        reentry_policy: policy,
        today: Some(date(y, m, d)),
        time_slots: default_time_slots(),
    }
}

/// Creates a controller on the appointment list, pinned to [`TODAY`].
#[must_use]
pub fn test_controller(policy: ReentryPolicy) -> BookingFlowController {
    BookingFlowController::new(&test_config(policy))
}

/// Books at the Bangsar branch with Minnie and stops on the date screen.
pub fn drive_to_date(flow: &mut BookingFlowController) {
    flow.book_appointment();
    flow.choose_branch(2);
    flow.choose_stylist(2);
    assert_eq!(flow.screen(), Screen::SelectDate);
}

/// Fills in every step with a cut on 20 August at noon and stops on the confirmation screen.
pub fn drive_to_confirmation(flow: &mut BookingFlowController) {
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(flow);
    flow.pick_date(date(2025, 8, 20), &mut prompter).unwrap();
    flow.pick_time(slot(12, 0));
    flow.confirm_date(&mut prompter).unwrap();
    flow.choose_service(ServiceCategory::Cut, ServiceChoice::selected("Cut"));
    flow.confirm_services(&mut prompter).unwrap();
    assert_eq!(flow.screen(), Screen::SelectConfirmation);
}
