// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use salonbook_core::{BookingSelection, FlowSnapshot, Screen};

/// Asserts that the snapshot shows the expected screen.
///
/// # Panics
///
/// Panics if the screens differ.
pub fn assert_screen(snapshot: &FlowSnapshot, expected: Screen) {
    assert_eq!(
        snapshot.screen, expected,
        "Expected screen {expected:?}, got {:?}",
        snapshot.screen
    );
}

/// Asserts that every field of the selection is filled in.
///
/// # Panics
///
/// Panics if any field is missing or no service is selected.
#[allow(dead_code)]
pub fn assert_selection_complete(selection: &BookingSelection) {
    assert!(selection.branch.is_some(), "Branch should be set");
    assert!(selection.stylist.is_some(), "Stylist should be set");
    assert!(selection.date.is_some(), "Date should be set");
    assert!(selection.time.is_some(), "Time should be set");
    assert!(selection.services.has_any(), "A service should be selected");
}
