// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;
use salonbook_core::{NavTarget, ServiceCategory, ServiceChoice, TimeSlot};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

/// User intents, one per operation of the booking flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BookAppointment,
    CancelAppointment(String),
    ChooseBranch(u32),
    ChooseStylist(u32),
    ShowNextMonth,
    ShowPrevMonth,
    PickDate(NaiveDate),
    PickTime(TimeSlot),
    ConfirmDate,
    ChooseService(ServiceCategory, ServiceChoice),
    ConfirmServices,
    ConfirmBooking,
    ChooseFeedbackAppointment(String),
    SetRating(u8),
    SetFeedbackText(String),
    SubmitFeedback,
    Back,
    Navigate(NavTarget),
}
