// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use chrono::{Local, NaiveDate};

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use salonbook_core::{BookingFlowController, Config as CoreConfig, FeedbackSubmission, MAX_RATING};

use crate::tui::booking_app::BookingApp;
use crate::tui::booking_store::BookingStore;
use crate::tui::component::Message;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::prompter::TerminalPrompter;

/// Runs the booking app until the customer quits.
pub fn run_booking(config: &CoreConfig) -> Result<(), Box<dyn Error>> {
    let feedback = Rc::new(RefCell::new(Vec::new()));
    let mut flow = BookingFlowController::new(config);
    {
        let feedback = feedback.clone();
        flow.on_feedback_submitted(move |a: &FeedbackSubmission| {
            feedback.borrow_mut().push(a.clone())
        });
    }

    let terminal = Rc::new(RefCell::new(ratatui::init()));
    let backdrop = Rc::new(RefCell::new(Buffer::empty(Rect::default())));
    let prompter = TerminalPrompter::new(terminal.clone(), backdrop.clone());
    let store = Rc::new(RefCell::new(BookingStore::new(flow, prompter)));

    let result = {
        let mut dispatcher = Dispatcher::new();
        BookingStore::register_to(store.clone(), &mut dispatcher);
        let mut app = BookingApp::new(dispatcher, &store);
        let mut area = Rect::default();

        loop {
            follow_clock(&store, config.today, Local::now().date_naive());
            {
                let mut terminal = terminal.borrow_mut();
                let drawn = terminal.draw(|frame| {
                    area = frame.area();
                    app.render(&store, area, frame.buffer_mut());
                    if let Some(pos) = app.get_cursor_position(&store, area) {
                        frame.set_cursor_position(pos);
                    }
                });
                match drawn {
                    Ok(completed) => *backdrop.borrow_mut() = completed.buffer.clone(),
                    Err(e) => break Err(e),
                }
            }

            // the terminal is not borrowed here, dialogs raised by the flow draw on it
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if app.on_key(&store, area, key) == Some(Message::Exit) {
                        break Ok(());
                    }
                }
                Ok(_) => {} // Continue the loop to render the next frame
                Err(e) => break Err(e),
            }
        }
    }; // release the app and its dispatcher before restoring the terminal
    ratatui::restore();
    result?;

    let store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    let flow = store.into_flow();
    tracing::info!(
        upcoming = flow.appointments().upcoming().len(),
        "booking session ended"
    );

    for a in feedback.borrow().iter() {
        println!(
            "Feedback for appointment {}: {}/{} {}",
            a.appointment_id, a.rating, MAX_RATING, a.text
        );
    }
    Ok(())
}

/// Moves "today" of the session to `now` unless the config pins it.
fn follow_clock(store: &RefCell<BookingStore>, pinned: Option<NaiveDate>, now: NaiveDate) {
    if pinned.is_none() {
        store.borrow_mut().flow.refresh_today(now);
    }
}
