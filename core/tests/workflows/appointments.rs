// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Appointment list workflow tests.

use salonbook_core::{Question, ReentryPolicy, Screen};

use crate::common::{ScriptedPrompter, assert_screen, test_controller};

#[test]
fn appointments_cancel_after_confirmation() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();

    // Act
    let snapshot = flow.cancel_appointment("1", &mut prompter);

    // Assert
    assert_screen(&snapshot, Screen::AppointmentList);
    assert_eq!(
        prompter.questions,
        vec![Question::CancelAppointment("1".to_string())]
    );
    assert!(flow.appointments().upcoming().is_empty());
}

#[test]
fn appointments_cancel_declined_keeps_appointment() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::no();

    flow.cancel_appointment("1", &mut prompter);

    assert_eq!(flow.appointments().upcoming().len(), 1);
}

#[test]
fn appointments_cancel_unknown_is_ignored() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::yes();

    flow.cancel_appointment("missing", &mut prompter);

    assert!(prompter.questions.is_empty());
    assert_eq!(flow.appointments().upcoming().len(), 1);
}

#[test]
fn appointments_sample_session_content() {
    let flow = test_controller(ReentryPolicy::Discard);
    let book = flow.appointments();

    assert_eq!(book.upcoming()[0].summary(), "Color | Touch Up");
    assert_eq!(book.past().len(), 3);
    assert_eq!(book.notifications().len(), 2);
}
