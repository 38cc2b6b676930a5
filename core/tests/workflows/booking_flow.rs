// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end booking workflow tests.
//!
//! These tests validate the path from the appointment list through branch, stylist, date and
//! service selection to the committed booking, including the validation gates.

use salonbook_core::{
    AppointmentStatus, FlowError, Notice, ReentryPolicy, Screen, ServiceCategory, ServiceChoice,
};

use crate::common::{
    ScriptedPrompter, assert_screen, assert_selection_complete, date, drive_to_confirmation,
    drive_to_date, slot, test_controller,
};

#[test]
fn booking_happy_path_commits_and_resets() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();

    // Act - walk every step
    assert_screen(&flow.book_appointment(), Screen::SelectBranch);
    assert_screen(&flow.choose_branch(2), Screen::SelectStylist);
    assert_screen(&flow.choose_stylist(1), Screen::SelectDate);
    flow.pick_date(date(2025, 8, 20), &mut prompter).unwrap();
    flow.pick_time(slot(10, 0));
    assert_screen(&flow.confirm_date(&mut prompter).unwrap(), Screen::SelectService);
    flow.choose_service(ServiceCategory::Cut, ServiceChoice::selected("Cut"));
    let snapshot = flow.confirm_services(&mut prompter).unwrap();

    // Assert - the confirmation shows every choice
    assert_screen(&snapshot, Screen::SelectConfirmation);
    let selection = &snapshot.selection;
    assert_selection_complete(selection);
    assert_eq!(selection.branch.as_ref().unwrap().name, "Bangsar Branch");
    assert_eq!(selection.stylist.as_ref().unwrap().name, "Jackson");
    assert_eq!(selection.date, Some(date(2025, 8, 20)));
    assert_eq!(selection.time, Some(slot(10, 0)));
    assert_eq!(selection.services.services(), vec!["Cut"]);

    // Act - commit
    let snapshot = flow.confirm_booking(&mut prompter).unwrap();

    // Assert - back on the list with an empty selection and a pending appointment
    assert_screen(&snapshot, Screen::AppointmentList);
    assert!(snapshot.selection.is_empty());
    assert_eq!(prompter.notices, vec![Notice::BookingConfirmed]);

    let upcoming = flow.appointments().upcoming();
    assert_eq!(upcoming.len(), 2);
    let booked = upcoming.last().unwrap();
    assert_eq!(booked.status, AppointmentStatus::Pending);
    assert_eq!(booked.date, date(2025, 8, 20));
    assert_eq!(booked.time, slot(10, 0));
    assert_eq!(booked.branch, "Bangsar Branch");
    assert_eq!(booked.stylist, "Jackson");
    assert_eq!(booked.services, vec!["Cut"]);
    assert!(!booked.id.is_empty());
}

#[test]
fn booking_confirm_date_without_time_is_rejected() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);
    let before = flow.snapshot();

    // Act
    let result = flow.confirm_date(&mut prompter);

    // Assert - no mutation, same screen, customer informed
    assert_eq!(result, Err(FlowError::MissingTimeSelection));
    assert_eq!(flow.snapshot(), before);
    assert_eq!(
        prompter.notices,
        vec![Notice::Rejected(FlowError::MissingTimeSelection)]
    );
}

#[test]
fn booking_confirm_services_without_choice_is_rejected() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);
    flow.pick_time(slot(15, 0));
    flow.confirm_date(&mut prompter).unwrap();

    // Act - explicitly pick none everywhere
    for category in ServiceCategory::ALL {
        flow.choose_service(category, ServiceChoice::NotSelected);
    }
    let before = flow.snapshot();
    let result = flow.confirm_services(&mut prompter);

    // Assert
    assert_eq!(result, Err(FlowError::NoServiceSelected));
    assert_eq!(flow.snapshot(), before);
    assert_screen(&before, Screen::SelectService);
    assert!(!flow.selection().services.has_any());
}

#[test]
fn booking_past_date_is_rejected() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);
    let picker = *flow.date_picker();

    // Act
    let result = flow.pick_date(date(2025, 8, 14), &mut prompter);

    // Assert - the picker keeps its previous date
    assert_eq!(result, Err(FlowError::PastDateSelected));
    assert_eq!(*flow.date_picker(), picker);
    assert_eq!(
        prompter.notices,
        vec![Notice::Rejected(FlowError::PastDateSelected)]
    );
}

#[test]
fn booking_today_is_selectable() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);

    assert!(flow.pick_date(flow.today(), &mut prompter).is_ok());
    assert!(prompter.notices.is_empty());
}

#[test]
fn booking_unknown_time_slot_is_ignored() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    drive_to_date(&mut flow);

    flow.pick_time(slot(11, 0));

    assert_eq!(flow.date_picker().time, None);
}

#[test]
fn booking_unknown_service_option_is_ignored() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);
    flow.pick_time(slot(15, 0));
    flow.confirm_date(&mut prompter).unwrap();

    flow.choose_service(ServiceCategory::Cut, ServiceChoice::selected("Perm"));

    assert!(!flow.service_draft().has_any());
}

#[test]
fn booking_month_navigation_follows_picks() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);

    // Act - browse forward and pick a day there
    flow.show_next_month();
    flow.show_next_month();
    assert_eq!(flow.month_grid().month().to_string(), "2025-10");
    flow.pick_date(date(2025, 10, 3), &mut prompter).unwrap();
    flow.show_prev_month();

    // Assert - the grid marks the pick only in its own month
    assert_eq!(flow.date_picker().date, date(2025, 10, 3));
    let grid = flow.month_grid();
    assert_eq!(grid.month().to_string(), "2025-09");
    assert!(grid.cells().all(|c| !c.is_selected));

    // Act - picking moves the visible month to the picked day
    flow.pick_date(date(2025, 12, 24), &mut prompter).unwrap();
    let grid = flow.month_grid();
    assert_eq!(grid.month().to_string(), "2025-12");
    assert!(grid.cell(date(2025, 12, 24)).unwrap().is_selected);
}

#[test]
fn booking_commit_of_selection_shows_in_appointment_summary() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();
    drive_to_date(&mut flow);
    flow.pick_time(slot(17, 0));
    flow.confirm_date(&mut prompter).unwrap();
    flow.choose_service(ServiceCategory::Color, ServiceChoice::selected("Touch up"));
    flow.choose_service(ServiceCategory::Styling, ServiceChoice::selected("Wash and Blow Dry"));
    flow.confirm_services(&mut prompter).unwrap();

    // Act
    flow.confirm_booking(&mut prompter).unwrap();

    // Assert
    let booked = flow.appointments().upcoming().last().unwrap();
    assert_eq!(booked.date, flow.today());
    assert_eq!(booked.summary(), "Color | Touch up | Styling | Wash and Blow Dry");
}

#[test]
fn booking_ids_are_unique() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();

    drive_to_confirmation(&mut flow);
    flow.confirm_booking(&mut prompter).unwrap();
    drive_to_confirmation(&mut flow);
    flow.confirm_booking(&mut prompter).unwrap();

    let upcoming = flow.appointments().upcoming();
    assert_eq!(upcoming.len(), 3);
    assert_ne!(upcoming[1].id, upcoming[2].id);
}
