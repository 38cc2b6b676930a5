// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Navigation workflow tests.
//!
//! These tests validate back-navigation, the bottom navigation bar and the discard question
//! asked when leaving the booking flow.

use salonbook_core::{NavTarget, Question, ReentryPolicy, Screen, ServiceCategory};

use crate::common::{
    ScriptedPrompter, assert_screen, date, drive_to_confirmation, slot, test_controller,
};

#[test]
fn navigation_back_walks_steps_and_keeps_fields() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    drive_to_confirmation(&mut flow);
    let complete = flow.selection().clone();
    let mut prompter = ScriptedPrompter::no();

    // Act & Assert - every back step keeps what was entered
    for expected in [
        Screen::SelectService,
        Screen::SelectDate,
        Screen::SelectStylist,
        Screen::SelectBranch,
    ] {
        let snapshot = flow.back(&mut prompter);
        assert_screen(&snapshot, expected);
        assert_eq!(snapshot.selection, complete);
    }
    assert!(prompter.questions.is_empty());
}

#[test]
fn navigation_back_restores_drafts_from_selection() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    drive_to_confirmation(&mut flow);
    let mut prompter = ScriptedPrompter::no();

    flow.back(&mut prompter);
    assert_eq!(
        flow.service_draft().get(ServiceCategory::Cut).as_option(),
        Some("Cut")
    );

    flow.back(&mut prompter);
    let picker = flow.date_picker();
    assert_eq!(picker.date, date(2025, 8, 20));
    assert_eq!(picker.time, Some(slot(12, 0)));
}

#[test]
fn navigation_back_from_branch_asks_before_leaving() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    flow.book_appointment();

    // Act - decline
    let mut prompter = ScriptedPrompter::no();
    let snapshot = flow.back(&mut prompter);

    // Assert - still choosing a branch
    assert_screen(&snapshot, Screen::SelectBranch);
    assert_eq!(prompter.questions, vec![Question::DiscardBooking]);

    // Act - accept
    let mut prompter = ScriptedPrompter::yes();
    let snapshot = flow.back(&mut prompter);

    // Assert
    assert_screen(&snapshot, Screen::AppointmentList);
    assert_eq!(prompter.questions, vec![Question::DiscardBooking]);
}

#[test]
fn navigation_back_is_noop_on_top_level_screens() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();

    assert_screen(&flow.back(&mut prompter), Screen::AppointmentList);

    flow.navigate(NavTarget::Account);
    assert_screen(&flow.back(&mut prompter), Screen::ChooseFeedback);

    flow.navigate(NavTarget::Notifications);
    assert_screen(&flow.back(&mut prompter), Screen::AppointmentList);
    assert!(prompter.questions.is_empty());
}

#[test]
fn navigation_cross_flow_keeps_booking() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    drive_to_confirmation(&mut flow);
    let selection = flow.selection().clone();

    // Act & Assert
    for (target, screen) in [
        (NavTarget::Home, Screen::AppointmentList),
        (NavTarget::Account, Screen::ChooseFeedback),
        (NavTarget::Notifications, Screen::Notification),
        (NavTarget::Appointments, Screen::AppointmentList),
    ] {
        let snapshot = flow.navigate(target);
        assert_screen(&snapshot, screen);
        assert_eq!(snapshot.selection, selection);
    }
}

#[test]
fn navigation_book_again_discards_abandoned_booking() {
    // Arrange - abandon a complete booking
    let mut flow = test_controller(ReentryPolicy::Discard);
    drive_to_confirmation(&mut flow);
    flow.navigate(NavTarget::Home);

    // Act
    let snapshot = flow.book_appointment();

    // Assert
    assert_screen(&snapshot, Screen::SelectBranch);
    assert!(snapshot.selection.is_empty());
}

#[test]
fn navigation_unexpected_events_change_nothing() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    flow.book_appointment();
    let before = flow.snapshot();

    assert_eq!(flow.choose_stylist(1), before);
    assert_eq!(flow.pick_time(slot(10, 0)), before);
    assert_eq!(flow.book_appointment(), before);
    assert_eq!(flow.confirm_booking(&mut prompter), Ok(before.clone()));
    assert_eq!(flow.choose_feedback_appointment("1"), before);
    assert!(prompter.notices.is_empty());
}
