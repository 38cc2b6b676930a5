// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Key hints shown at the bottom of a page, as `(action, key)` pairs.
pub type Instructions = &'static [(&'static str, &'static str)];

pub struct SinglePage<S, C: Component<S>> {
    title: String,
    instructions: Instructions,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, instructions: Instructions, inner: C) -> Self {
        Self {
            title: title.to_string(),
            instructions,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn inner_area(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(instructions(self.instructions).centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.inner.get_cursor_position(store, self.inner_area(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.inner_area(area);
        self.inner.on_key(dispatcher, store, inner_area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}

fn instructions(pairs: Instructions) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(pairs.len() * 2 + 2);
    for (action, key) in pairs {
        spans.push(format!(" {action} ").into());
        spans.push(format!("<{key}>").blue().bold());
    }
    spans.push(" Back ".into());
    spans.push("<Esc> ".blue().bold());
    Line::from(spans)
}

/// The bottom navigation bar, the entry of the current section is highlighted.
pub fn nav_bar(current: usize) -> Line<'static> {
    const ENTRIES: [(&str, &str); 4] = [
        ("F1", "Home"),
        ("F2", "Appointments"),
        ("F3", "Account"),
        ("F4", "Notifications"),
    ];

    let mut spans: Vec<Span<'static>> = Vec::with_capacity(ENTRIES.len() * 3 + 2);
    for (i, (key, label)) in ENTRIES.iter().enumerate() {
        spans.push(format!(" {key} ").blue().bold());
        if i == current {
            spans.push(label.to_string().reversed());
        } else {
            spans.push(label.to_string().into());
        }
        spans.push(Span::raw(" "));
    }
    spans.push(" Quit ".into());
    spans.push("<Ctrl-C>".blue().bold());
    Line::from(spans)
}
