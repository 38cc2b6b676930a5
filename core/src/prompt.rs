// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::FlowError;

/// A yes/no question asked before a destructive transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Leaving the booking flow from the branch screen.
    DiscardBooking,

    /// Leaving the feedback form with unsaved input.
    DiscardFeedback,

    /// Cancelling the upcoming appointment with the given id.
    CancelAppointment(String),
}

impl Question {
    pub fn title(&self) -> &'static str {
        match self {
            Question::DiscardBooking => "Discard Booking",
            Question::DiscardFeedback => "Unsaved Changes",
            Question::CancelAppointment(_) => "Cancel Appointment",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::DiscardBooking => {
                write!(f, "Are you sure you want to discard this booking?")
            }
            Question::DiscardFeedback => {
                write!(f, "You have unsaved changes. Are you sure to discard them?")
            }
            Question::CancelAppointment(_) => {
                write!(f, "Are you sure you want to cancel this appointment?")
            }
        }
    }
}

/// A message the customer has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An operation was refused.
    Rejected(FlowError),

    /// The booking was sent to the salon.
    BookingConfirmed,

    /// The feedback was sent.
    FeedbackSubmitted,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Rejected(_) => "Oops",
            Notice::BookingConfirmed | Notice::FeedbackSubmitted => "Success!",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Rejected(err) => write!(f, "{err}"),
            Notice::BookingConfirmed => {
                write!(f, "Your booking has been submitted and is pending approval.")
            }
            Notice::FeedbackSubmitted => write!(f, "Thank you for your feedback."),
        }
    }
}

/// Synchronous dialogs shown on behalf of the flow controller.
pub trait Prompter {
    /// Asks a yes/no question, returns true when the customer agrees.
    fn confirm(&mut self, question: &Question) -> bool;

    /// Shows a notice and waits until it is dismissed.
    fn acknowledge(&mut self, notice: &Notice);
}

/// A prompter that agrees to every question and dismisses every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, _question: &Question) -> bool {
        true
    }

    fn acknowledge(&mut self, _notice: &Notice) {}
}
