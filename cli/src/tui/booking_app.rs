// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use salonbook_core::{NavTarget, Screen};

use crate::tui::booking_store::BookingStore;
use crate::tui::booking_views::{View, new_view};
use crate::tui::component::{Component, Message};
use crate::tui::component_page::nav_bar;
use crate::tui::dispatcher::{Action, Dispatcher};

/// The whole booking app, the page of the current screen above the navigation bar.
pub struct BookingApp {
    dispatcher: Dispatcher,
    screen: Screen,
    view: View,
}

impl BookingApp {
    pub fn new(mut dispatcher: Dispatcher, store: &RefCell<BookingStore>) -> Self {
        let screen = store.borrow().flow.screen();
        let mut view = new_view(screen);
        view.activate(&mut dispatcher, store);
        Self {
            dispatcher,
            screen,
            view,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    fn split(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
    }

    pub fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        let [page, bar] = Self::split(area);
        self.view.render(store, page, buf);
        nav_bar(nav_index(self.screen)).render(bar, buf);
    }

    pub fn get_cursor_position(
        &self,
        store: &RefCell<BookingStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        let [page, _] = Self::split(area);
        self.view.get_cursor_position(store, page)
    }

    pub fn on_key(
        &mut self,
        store: &RefCell<BookingStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Some(Message::Exit);
        }

        let [page, _] = Self::split(area);
        let msg = match self.view.on_key(&mut self.dispatcher, store, page, event) {
            Some(msg) => Some(msg),
            None => self.on_global_key(event),
        };

        self.sync_screen(store);
        msg
    }

    fn on_global_key(&mut self, event: KeyEvent) -> Option<Message> {
        let action = match event.code {
            KeyCode::F(1) => Action::Navigate(NavTarget::Home),
            KeyCode::F(2) => Action::Navigate(NavTarget::Appointments),
            KeyCode::F(3) => Action::Navigate(NavTarget::Account),
            KeyCode::F(4) => Action::Navigate(NavTarget::Notifications),
            KeyCode::Esc => Action::Back,
            _ => return None,
        };
        self.dispatcher.dispatch(action);
        Some(Message::Handled)
    }

    /// Swaps the view when the controller moved to another screen.
    fn sync_screen(&mut self, store: &RefCell<BookingStore>) {
        let screen = store.borrow().flow.screen();
        if screen == self.screen {
            return;
        }

        tracing::debug!(from = ?self.screen, to = ?screen, "switch view");
        self.view.deactivate(&mut self.dispatcher, store);
        self.view = new_view(screen);
        self.view.activate(&mut self.dispatcher, store);
        self.screen = screen;
    }
}

/// Entry of the navigation bar a screen belongs to, the booking steps count as home.
fn nav_index(screen: Screen) -> usize {
    if screen.is_booking_step() {
        return 0;
    }

    match screen {
        Screen::AppointmentList => 1,
        Screen::Notification => 3,
        _ => 2,
    }
}
