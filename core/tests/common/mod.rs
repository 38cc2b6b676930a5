// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - A scripted prompter standing in for the dialogs

mod assertions;
mod fixtures;
mod prompter;

#[allow(unused_imports)]
pub use assertions::{assert_screen, assert_selection_complete};
#[allow(unused_imports)]
pub use fixtures::{
    TODAY, date, drive_to_confirmation, drive_to_date, slot, test_config, test_controller,
};
pub use prompter::ScriptedPrompter;
