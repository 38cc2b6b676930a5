// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod booking_app;
mod booking_store;
mod booking_views;
mod component;
mod component_calendar;
mod component_dialog;
mod component_form;
mod component_list;
mod component_page;
mod dispatcher;
mod prompter;

pub use app::run_booking;
