// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Validation failures of the booking and feedback flows.
///
/// The display text is the message shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Confirmed the date screen without picking a time.
    #[error("Please select an available time slot to continue.")]
    MissingTimeSelection,

    /// Confirmed the service screen with every category set to none.
    #[error("Please select at least one service to continue.")]
    NoServiceSelected,

    /// Submitted feedback without any star.
    #[error("Please provide a rating before submitting your feedback.")]
    MissingRating,

    /// Picked a day before today.
    #[error("You can only select a future date for an appointment.")]
    PastDateSelected,

    /// Committed a booking with a field still empty.
    #[error("The booking is incomplete: {missing} not selected.")]
    IncompleteSelection {
        /// The first missing field
        missing: &'static str,
    },
}
