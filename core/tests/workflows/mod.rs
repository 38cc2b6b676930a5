// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the salonbook-core crate.
//!
//! These tests drive the flow controller through complete user journeys, covering the booking
//! steps, validation gates, the feedback sub-flow and the configurable behavior.

mod appointments;
mod booking_flow;
mod config_driven;
mod feedback_flow;
mod navigation;
