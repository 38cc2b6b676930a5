// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};
use salonbook_core::{Notice, Question};
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: u16 = 48;

/// A modal box centred over whatever was drawn before.
#[derive(Debug, Clone)]
pub struct Dialog<'a> {
    title: &'a str,
    message: String,
    keys: Line<'a>,
    color: Color,
}

impl<'a> Dialog<'a> {
    pub fn question(question: &'a Question) -> Self {
        Self {
            title: question.title(),
            message: question.to_string(),
            keys: Line::from(vec![
                " Yes ".into(),
                "<y/Enter>".blue().bold(),
                " No ".into(),
                "<n/Esc> ".blue().bold(),
            ]),
            color: Color::Yellow,
        }
    }

    pub fn notice(notice: &'a Notice) -> Self {
        let color = match notice {
            Notice::Rejected(_) => Color::Red,
            Notice::BookingConfirmed | Notice::FeedbackSubmitted => Color::Green,
        };
        Self {
            title: notice.title(),
            message: notice.to_string(),
            keys: Line::from(vec![" OK ".into(), "<any key> ".blue().bold()]),
            color,
        }
    }

    /// The centred rectangle the dialog occupies within `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width);
        // border (2) + padding (2)
        let text_width = width.saturating_sub(4).max(1) as usize;
        let lines = self.message.width().div_ceil(text_width).max(1) as u16;
        // border (2) + blank lines around the message (2)
        let height = (lines + 4).min(area.height);

        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.area(area);
        Clear.render(area, buf);

        let title = Line::from(format!(" {} ", self.title).bold());
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.color))
            .title(title.centered())
            .title_bottom(self.keys.centered())
            .padding(Padding::new(1, 1, 1, 1));

        Paragraph::new(self.message)
            .wrap(Wrap { trim: true })
            .centered()
            .block(block)
            .render(area, buf);
    }
}
