// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Feedback workflow tests.
//!
//! These tests validate choosing a past appointment, rating it and submitting the feedback to
//! the registered listeners.

use std::cell::RefCell;
use std::rc::Rc;

use salonbook_core::{
    FeedbackSubmission, FlowError, NavTarget, Notice, Question, ReentryPolicy, Screen,
};

use crate::common::{ScriptedPrompter, assert_screen, test_controller};

fn collect_submissions(
    flow: &mut salonbook_core::BookingFlowController,
) -> Rc<RefCell<Vec<FeedbackSubmission>>> {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    flow.on_feedback_submitted(move |a| sink.borrow_mut().push(a.clone()));
    received
}

#[test]
fn feedback_without_rating_is_rejected() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let received = collect_submissions(&mut flow);
    let mut prompter = ScriptedPrompter::yes();
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("2");
    flow.set_feedback_text("Lovely colour");
    let before = flow.snapshot();

    // Act
    let result = flow.submit_feedback(&mut prompter);

    // Assert - nothing sent, still on the form with the text kept
    assert_eq!(result, Err(FlowError::MissingRating));
    assert_eq!(flow.snapshot(), before);
    assert!(received.borrow().is_empty());
    assert_eq!(flow.feedback_draft().unwrap().text, "Lovely colour");
    assert_eq!(
        prompter.notices,
        vec![Notice::Rejected(FlowError::MissingRating)]
    );
}

#[test]
fn feedback_with_rating_is_submitted() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    let received = collect_submissions(&mut flow);
    let mut prompter = ScriptedPrompter::yes();
    flow.navigate(NavTarget::Account);

    // Act
    assert_screen(&flow.choose_feedback_appointment("1"), Screen::SubmitFeedback);
    flow.set_rating(3);
    flow.set_feedback_text("Friendly stylist");
    let snapshot = flow.submit_feedback(&mut prompter).unwrap();

    // Assert
    assert_screen(&snapshot, Screen::ChooseFeedback);
    assert!(flow.feedback_draft().is_none());
    assert_eq!(prompter.notices, vec![Notice::FeedbackSubmitted]);
    assert_eq!(
        *received.borrow(),
        vec![FeedbackSubmission {
            appointment_id: "1".to_string(),
            rating: 3,
            text: "Friendly stylist".to_string(),
        }]
    );
}

#[test]
fn feedback_text_is_optional() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let received = collect_submissions(&mut flow);
    let mut prompter = ScriptedPrompter::yes();
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("3");
    flow.set_rating(5);

    assert!(flow.submit_feedback(&mut prompter).is_ok());
    assert_eq!(received.borrow()[0].text, "");
}

#[test]
fn feedback_rating_is_clamped() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("1");

    flow.set_rating(42);

    assert_eq!(flow.feedback_draft().unwrap().rating, 5);
}

#[test]
fn feedback_unknown_appointment_is_ignored() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    flow.navigate(NavTarget::Account);

    let snapshot = flow.choose_feedback_appointment("99");

    assert_screen(&snapshot, Screen::ChooseFeedback);
    assert!(flow.feedback_draft().is_none());
}

#[test]
fn feedback_back_with_changes_asks_first() {
    // Arrange
    let mut flow = test_controller(ReentryPolicy::Discard);
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("1");
    flow.set_rating(4);

    // Act - decline
    let mut prompter = ScriptedPrompter::no();
    assert_screen(&flow.back(&mut prompter), Screen::SubmitFeedback);
    assert_eq!(prompter.questions, vec![Question::DiscardFeedback]);
    assert_eq!(flow.feedback_draft().unwrap().rating, 4);

    // Act - accept
    let mut prompter = ScriptedPrompter::yes();
    assert_screen(&flow.back(&mut prompter), Screen::ChooseFeedback);
    assert!(flow.feedback_draft().is_none());
}

#[test]
fn feedback_back_without_changes_leaves_directly() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    let mut prompter = ScriptedPrompter::no();
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("1");

    assert_screen(&flow.back(&mut prompter), Screen::ChooseFeedback);
    assert!(prompter.questions.is_empty());
}

#[test]
fn feedback_navigation_drops_draft() {
    let mut flow = test_controller(ReentryPolicy::Discard);
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("1");
    flow.set_rating(2);

    flow.navigate(NavTarget::Notifications);
    assert!(flow.feedback_draft().is_none());

    // Reopening starts fresh
    flow.navigate(NavTarget::Account);
    flow.choose_feedback_appointment("1");
    assert_eq!(flow.feedback_draft().unwrap().rating, 0);
}
