// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, fmt, rc::Rc};

use salonbook_core::{BookingFlowController, FlowError, FlowSnapshot, Prompter};

use crate::tui::dispatcher::{Action, Dispatcher};

/// The booking session shared by all views.
pub struct BookingStore {
    pub flow: BookingFlowController,
    prompter: Box<dyn Prompter>,

    /// The rejection of the last action, if any.
    pub last_error: Option<FlowError>,
}

impl fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingStore")
            .field("flow", &self.flow)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl BookingStore {
    pub fn new(flow: BookingFlowController, prompter: impl Prompter + 'static) -> Self {
        Self {
            flow,
            prompter: Box::new(prompter),
            last_error: None,
        }
    }

    pub fn into_flow(self) -> BookingFlowController {
        self.flow
    }

    /// Applies the action to the controller.
    pub fn apply(&mut self, action: &Action) {
        let flow = &mut self.flow;
        let prompter = self.prompter.as_mut();
        let result: Result<FlowSnapshot, FlowError> = match action {
            Action::BookAppointment => Ok(flow.book_appointment()),
            Action::CancelAppointment(id) => Ok(flow.cancel_appointment(id, prompter)),
            Action::ChooseBranch(id) => Ok(flow.choose_branch(*id)),
            Action::ChooseStylist(id) => Ok(flow.choose_stylist(*id)),
            Action::ShowNextMonth => Ok(flow.show_next_month()),
            Action::ShowPrevMonth => Ok(flow.show_prev_month()),
            Action::PickDate(date) => flow.pick_date(*date, prompter),
            Action::PickTime(slot) => Ok(flow.pick_time(*slot)),
            Action::ConfirmDate => flow.confirm_date(prompter),
            Action::ChooseService(category, choice) => {
                Ok(flow.choose_service(*category, choice.clone()))
            }
            Action::ConfirmServices => flow.confirm_services(prompter),
            Action::ConfirmBooking => flow.confirm_booking(prompter),
            Action::ChooseFeedbackAppointment(id) => Ok(flow.choose_feedback_appointment(id)),
            Action::SetRating(stars) => Ok(flow.set_rating(*stars)),
            Action::SetFeedbackText(text) => Ok(flow.set_feedback_text(text.as_str())),
            Action::SubmitFeedback => flow.submit_feedback(prompter),
            Action::Back => Ok(flow.back(prompter)),
            Action::Navigate(target) => Ok(flow.navigate(*target)),
        };

        if let Err(err) = &result {
            tracing::debug!(?action, %err, "action rejected");
        }
        self.last_error = result.err();
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }
}
