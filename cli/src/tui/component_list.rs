// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

const S_POINTER: &str = "▶ ";

/// One entry of a list, a title followed by a few detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: String,
    pub details: Vec<String>,
    pub color: Option<Color>,
}

impl ListEntry {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            details: Vec::new(),
            color: None,
        }
    }

    pub fn detail(mut self, line: impl ToString) -> Self {
        self.details.push(line.to_string());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Rows taken by the entry, including the blank separator line.
    fn height(&self) -> u16 {
        self.details.len() as u16 + 2
    }
}

/// Where a list reads its entries from and what picking one does.
pub trait ListSource<S> {
    fn entries(store: &RefCell<S>) -> Vec<ListEntry>;

    /// Called on `Enter`, `None` leaves the key to the parent.
    fn choose(dispatcher: &mut Dispatcher, store: &RefCell<S>, index: usize) -> Option<Message>;
}

pub struct ListPicker<S, L: ListSource<S>> {
    selected: usize,
    empty_text: &'static str,
    _phantom: PhantomData<(S, L)>,
}

impl<S, L: ListSource<S>> ListPicker<S, L> {
    pub fn new(empty_text: &'static str) -> Self {
        Self {
            selected: 0,
            empty_text,
            _phantom: PhantomData,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First entry to draw so the selected one stays visible.
    fn offset(&self, entries: &[ListEntry], height: u16) -> usize {
        let mut used = 0;
        let mut start = self.selected.min(entries.len().saturating_sub(1));
        for (i, entry) in entries.iter().enumerate().take(start + 1).rev() {
            used += entry.height();
            if used > height {
                break;
            }
            start = i;
        }
        start
    }
}

impl<S, L: ListSource<S>> Component<S> for ListPicker<S, L> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let entries = L::entries(store);
        if entries.is_empty() {
            Paragraph::new(self.empty_text)
                .fg(Color::DarkGray)
                .centered()
                .render(area, buf);
            return;
        }

        let selected = self.selected.min(entries.len() - 1);
        let mut lines = Vec::new();
        for (i, entry) in entries.iter().enumerate().skip(self.offset(&entries, area.height)) {
            let color = entry.color.unwrap_or(Color::White);
            let title = if i == selected {
                Line::from(vec![
                    S_POINTER.fg(Color::Blue).bold(),
                    entry.title.clone().fg(color).bold().reversed(),
                ])
            } else {
                Line::from(vec!["  ".into(), entry.title.clone().fg(color).bold()])
            };
            lines.push(title);
            for detail in &entry.details {
                lines.push(Line::from(format!("  {detail}")).fg(Color::Gray));
            }
            lines.push(Line::default());
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let len = L::entries(store).len();
        match event.code {
            KeyCode::Up | KeyCode::Char('k') if self.selected > 0 => {
                self.selected -= 1;
                Some(Message::Handled)
            }
            KeyCode::Down | KeyCode::Char('j') if self.selected + 1 < len => {
                self.selected += 1;
                Some(Message::Handled)
            }
            KeyCode::Enter if self.selected < len => L::choose(dispatcher, store, self.selected),
            _ => None,
        }
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        let len = L::entries(store).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
