// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Days, NaiveDate};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use salonbook_core::{CalendarCell, TimeSlot, YearMonth};

use crate::tui::booking_store::BookingStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
// 7 cells of 2 columns plus 6 gaps
const CALENDAR_WIDTH: u16 = 20;

/// Month calendar with the time slots of the highlighted day.
#[derive(Debug, Default)]
pub struct DateTimePicker;

impl DateTimePicker {
    pub fn new() -> Self {
        Self
    }

    fn split(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Length(CALENDAR_WIDTH + 4), Constraint::Fill(1)])
            .margin(1)
            .areas(area)
    }

    fn render_calendar(store: &BookingStore, area: Rect, buf: &mut Buffer) {
        let grid = store.flow.month_grid();
        let mut lines = vec![
            Line::from(vec![
                "◀ ".fg(Color::Blue),
                format!("{:^16}", grid.month().title()).bold(),
                " ▶".fg(Color::Blue),
            ]),
            Line::from(WEEKDAY_HEADER.fg(Color::Gray)),
        ];

        for row in grid.rows() {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(match cell {
                    Some(cell) => cell_span(cell),
                    None => Span::raw("  "),
                });
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_slots(store: &BookingStore, area: Rect, buf: &mut Buffer) {
        let picked = store.flow.date_picker().time;
        let mut lines = vec![
            Line::from(store.flow.date_picker().date.format("%a, %d %b %Y").to_string().bold()),
            Line::from("Available time".fg(Color::Gray)),
        ];
        for slot in store.flow.catalog().time_slots() {
            let line = if picked == Some(*slot) {
                Line::from(format!("(•) {slot}")).fg(Color::Blue).bold()
            } else {
                Line::from(format!("( ) {slot}"))
            };
            lines.push(line);
        }

        Paragraph::new(lines).render(area, buf);
    }

    /// The slot after (or before) the picked one, wrapping around.
    fn cycle_slot(store: &BookingStore, forward: bool) -> Option<TimeSlot> {
        let slots = store.flow.catalog().time_slots();
        if slots.is_empty() {
            return None;
        }

        let len = slots.len();
        let index = match store.flow.date_picker().time {
            Some(t) => slots.iter().position(|a| *a == t),
            None => None,
        };
        let next = match (index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        slots.get(next).copied()
    }
}

impl Component<BookingStore> for DateTimePicker {
    fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let [calendar, slots] = Self::split(area);
        Self::render_calendar(&store, calendar, buf);
        Self::render_slots(&store, slots, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (date, today, month) = {
            let store = store.borrow();
            let picker = store.flow.date_picker();
            (picker.date, store.flow.today(), picker.visible_month)
        };
        let is_arrow = matches!(
            event.code,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
        );

        let action = match event.code {
            // after paging, the first move lands in the shown month
            _ if is_arrow && YearMonth::from_date(date) != month => {
                Some(Action::PickDate(first_selectable_day(month, today)))
            }
            KeyCode::Left => shift(date, -1).map(Action::PickDate),
            KeyCode::Right => shift(date, 1).map(Action::PickDate),
            KeyCode::Up => shift(date, -7).map(Action::PickDate),
            KeyCode::Down => shift(date, 7).map(Action::PickDate),
            KeyCode::PageDown | KeyCode::Char(']') => Some(Action::ShowNextMonth),
            KeyCode::PageUp | KeyCode::Char('[') => Some(Action::ShowPrevMonth),
            KeyCode::Tab | KeyCode::BackTab => {
                let forward = event.code == KeyCode::Tab;
                Self::cycle_slot(&store.borrow(), forward).map(Action::PickTime)
            }
            KeyCode::Enter => Some(Action::ConfirmDate),
            _ => return None,
        };

        match action {
            // moving onto a past day is not an error, the cursor just stops
            Some(Action::PickDate(d)) if d < today => {}
            Some(action) => dispatcher.dispatch(action),
            None => {}
        }
        Some(Message::Handled)
    }
}

fn first_selectable_day(month: YearMonth, today: NaiveDate) -> NaiveDate {
    if YearMonth::from_date(today) == month {
        today
    } else {
        month.first_day()
    }
}

fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(delta)
    } else {
        date.checked_add_days(delta)
    }
}

fn cell_span(cell: &CalendarCell) -> Span<'static> {
    let text = format!("{:>2}", cell.day);
    let mut style = Style::new();
    if cell.is_past {
        style = style.fg(Color::DarkGray);
    }
    if cell.is_today {
        style = style.underlined();
    }
    if cell.is_selected {
        style = style.fg(Color::Blue).bold().reversed();
    }
    Span::styled(text, style)
}
