// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the controller, including the re-entry
//! policy, the pinned day and the offered time slots.

use salonbook_core::{BookingFlowController, Config, NavTarget, ReentryPolicy, Screen};

use crate::common::{
    ScriptedPrompter, assert_screen, date, drive_to_confirmation, slot, test_config,
    test_controller,
};

#[test]
fn config_resume_policy_keeps_abandoned_booking() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Resume);
    drive_to_confirmation(&mut flow);
    let selection = flow.selection().clone();
    flow.navigate(NavTarget::Home);

    // Act
    let snapshot = flow.book_appointment();

    // Assert
    assert_screen(&snapshot, Screen::SelectBranch);
    assert_eq!(snapshot.selection, selection);
}

#[test]
fn config_resume_policy_still_resets_after_commit() {
    let mut flow = test_controller(ReentryPolicy::Resume);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_confirmation(&mut flow);
    flow.confirm_booking(&mut prompter).unwrap();

    let snapshot = flow.book_appointment();

    assert!(snapshot.selection.is_empty());
}

#[test]
fn config_today_is_pinned() {
    // Arrange
    let mut config = test_config(ReentryPolicy::Discard);
    config.today = Some(date(2030, 1, 31));

    // Act
    let flow = BookingFlowController::new(&config);

    // Assert
    assert_eq!(flow.today(), date(2030, 1, 31));
    let grid = flow.month_grid();
    assert_eq!(grid.month().to_string(), "2030-01");
    assert!(grid.cell(date(2030, 1, 31)).unwrap().is_today);
    assert!(grid.cell(date(2030, 1, 30)).unwrap().is_past);
}

#[test]
fn config_time_slots_limit_choices() {
    // Arrange
    let config = Config {
        time_slots: vec![slot(9, 30)],
        ..test_config(ReentryPolicy::Discard)
    };
    let mut flow = BookingFlowController::new(&config);
    flow.book_appointment();
    flow.choose_branch(1);
    flow.choose_stylist(3);

    // Act
    flow.pick_time(slot(10, 0));
    assert_eq!(flow.date_picker().time, None);
    flow.pick_time(slot(9, 30));

    // Assert
    assert_eq!(flow.date_picker().time, Some(slot(9, 30)));
    assert_eq!(flow.catalog().time_slots(), &[slot(9, 30)]);
}

#[test]
fn config_refresh_today_moves_past_boundary() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    flow.book_appointment();
    flow.choose_branch(1);
    flow.choose_stylist(1);
    flow.pick_time(slot(10, 0));

    // The picker still holds the old day once it is in the past
    flow.refresh_today(date(2025, 8, 16));
    assert!(flow.confirm_date(&mut prompter).is_err());
    assert_eq!(flow.screen(), Screen::SelectDate);
}
