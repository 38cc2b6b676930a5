// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, io, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use salonbook_core::{Notice, Prompter, Question};

use crate::tui::component_dialog::Dialog;

/// Shows dialogs on top of the last drawn frame and blocks until a key answers them.
pub struct TerminalPrompter {
    terminal: Rc<RefCell<DefaultTerminal>>,
    backdrop: Rc<RefCell<Buffer>>,
}

impl TerminalPrompter {
    pub fn new(terminal: Rc<RefCell<DefaultTerminal>>, backdrop: Rc<RefCell<Buffer>>) -> Self {
        Self { terminal, backdrop }
    }

    fn show(&self, dialog: Dialog<'_>) -> io::Result<()> {
        let backdrop = self.backdrop.borrow();
        self.terminal.borrow_mut().draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            for pos in backdrop.area.intersection(area).positions() {
                buf[pos] = backdrop[pos].clone();
            }
            dialog.render(area, buf);
        })?;
        Ok(())
    }

    /// Waits for the first key press and maps it with `f`, ignoring keys it rejects.
    fn wait_key<T>(f: impl Fn(KeyCode) -> Option<T>) -> io::Result<T> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(v) = f(key.code)
            {
                return Ok(v);
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &Question) -> bool {
        let result = self
            .show(Dialog::question(question))
            .and_then(|_| Self::wait_key(answer));
        match result {
            Ok(v) => {
                tracing::debug!(?question, answer = v, "question answered");
                v
            }
            Err(e) => {
                tracing::error!(?question, %e, "failed to show question, assuming no");
                false
            }
        }
    }

    fn acknowledge(&mut self, notice: &Notice) {
        let result = self
            .show(Dialog::notice(notice))
            .and_then(|_| Self::wait_key(|_| Some(())));
        if let Err(e) = result {
            tracing::error!(?notice, %e, "failed to show notice");
        }
    }
}

/// Maps a key to the answer of a yes/no dialog.
fn answer(code: KeyCode) -> Option<bool> {
    match code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}
