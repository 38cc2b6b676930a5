// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::FlowError;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// Feedback being written for a past appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    /// The reviewed past appointment.
    pub appointment_id: String,

    /// Stars given, 0 means not rated yet.
    pub rating: u8,

    /// Free text, optional.
    pub text: String,
}

impl FeedbackDraft {
    /// Creates an empty draft for the given appointment.
    pub fn new(appointment_id: impl Into<String>) -> Self {
        Self {
            appointment_id: appointment_id.into(),
            rating: 0,
            text: String::new(),
        }
    }

    /// Sets the rating, clamped to `0..=MAX_RATING`.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.min(MAX_RATING);
    }

    /// Whether the customer entered anything.
    pub fn has_unsaved_changes(&self) -> bool {
        self.rating > 0 || !self.text.is_empty()
    }

    /// Turns the draft into a submission, a rating is required.
    pub fn submit(&self) -> Result<FeedbackSubmission, FlowError> {
        if self.rating == 0 {
            return Err(FlowError::MissingRating);
        }

        Ok(FeedbackSubmission {
            appointment_id: self.appointment_id.clone(),
            rating: self.rating,
            text: self.text.trim().to_string(),
        })
    }
}

/// Feedback handed to the registered listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub appointment_id: String,
    pub rating: u8,
    pub text: String,
}
