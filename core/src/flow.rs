// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::{
    Appointment, AppointmentBook, Branch, Catalog, Config, FeedbackDraft, FeedbackSubmission,
    FlowError, MonthGrid, Notice, Prompter, Question, ReentryPolicy, ServiceCategory,
    ServiceChoice, ServiceSelection, Stylist, TimeSlot, YearMonth,
};

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    AppointmentList,
    SelectBranch,
    SelectStylist,
    SelectDate,
    SelectService,
    SelectConfirmation,
    Notification,
    ChooseFeedback,
    SubmitFeedback,
}

impl Screen {
    /// Whether the screen is one of the booking steps.
    pub fn is_booking_step(&self) -> bool {
        matches!(
            self,
            Screen::SelectBranch
                | Screen::SelectStylist
                | Screen::SelectDate
                | Screen::SelectService
                | Screen::SelectConfirmation
        )
    }

    /// Heading shown above the screen.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::AppointmentList => "Appointments",
            Screen::SelectBranch => "Select Branch",
            Screen::SelectStylist => "Select Stylist",
            Screen::SelectDate => "Select Date & Time",
            Screen::SelectService => "Select Service",
            Screen::SelectConfirmation => "Confirm Booking",
            Screen::Notification => "Notifications",
            Screen::ChooseFeedback => "Give Feedback",
            Screen::SubmitFeedback => "Submit Feedback",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Destinations of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Appointments,
    Account,
    Notifications,
}

impl NavTarget {
    /// The screen the destination opens.
    pub fn screen(&self) -> Screen {
        match self {
            NavTarget::Home | NavTarget::Appointments => Screen::AppointmentList,
            NavTarget::Account => Screen::ChooseFeedback,
            NavTarget::Notifications => Screen::Notification,
        }
    }
}

/// Choices accumulated during one booking.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    pub branch: Option<Branch>,
    pub stylist: Option<Stylist>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub services: ServiceSelection,
}

impl BookingSelection {
    /// Whether nothing has been chosen yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The first field still missing for a complete booking.
    fn missing_field(&self) -> Option<&'static str> {
        if self.branch.is_none() {
            Some("branch")
        } else if self.stylist.is_none() {
            Some("stylist")
        } else if self.date.is_none() {
            Some("date")
        } else if self.time.is_none() {
            Some("time")
        } else if !self.services.has_any() {
            Some("service")
        } else {
            None
        }
    }
}

/// The current screen and the selection, as seen after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSnapshot {
    pub screen: Screen,
    pub selection: BookingSelection,
}

/// Date and time being picked on the date screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    /// The month shown in the calendar.
    pub visible_month: YearMonth,

    /// The highlighted day.
    pub date: NaiveDate,

    /// The highlighted time slot.
    pub time: Option<TimeSlot>,
}

impl DatePicker {
    fn new(date: NaiveDate, time: Option<TimeSlot>) -> Self {
        Self {
            visible_month: YearMonth::from_date(date),
            date,
            time,
        }
    }
}

type FeedbackListener = Box<dyn FnMut(&FeedbackSubmission)>;

/// Drives the screens of a session and the selection threaded through them.
pub struct BookingFlowController {
    screen: Screen,
    selection: BookingSelection,
    policy: ReentryPolicy,
    today: NaiveDate,

    catalog: Catalog,
    book: AppointmentBook,

    date_picker: DatePicker,
    service_draft: ServiceSelection,
    feedback: Option<FeedbackDraft>,
    feedback_listeners: Vec<FeedbackListener>,
}

impl fmt::Debug for BookingFlowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingFlowController")
            .field("screen", &self.screen)
            .field("selection", &self.selection)
            .field("policy", &self.policy)
            .field("today", &self.today)
            .field("date_picker", &self.date_picker)
            .field("service_draft", &self.service_draft)
            .field("feedback", &self.feedback)
            .field("feedback_listeners", &self.feedback_listeners.len())
            .finish_non_exhaustive()
    }
}

impl BookingFlowController {
    /// Creates a session with the sample catalog and appointments.
    pub fn new(config: &Config) -> Self {
        let today = config.today.unwrap_or_else(|| Local::now().date_naive());
        Self::with_parts(
            Catalog::with_time_slots(config.time_slots.clone()),
            AppointmentBook::sample(),
            config.reentry_policy,
            today,
        )
    }

    /// Creates a session from its parts, starting on the appointment list.
    pub fn with_parts(
        catalog: Catalog,
        book: AppointmentBook,
        policy: ReentryPolicy,
        today: NaiveDate,
    ) -> Self {
        Self {
            screen: Screen::AppointmentList,
            selection: BookingSelection::default(),
            policy,
            today,
            catalog,
            book,
            date_picker: DatePicker::new(today, None),
            service_draft: ServiceSelection::default(),
            feedback: None,
            feedback_listeners: Vec::new(),
        }
    }

    /// The current screen and selection.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            screen: self.screen,
            selection: self.selection.clone(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn appointments(&self) -> &AppointmentBook {
        &self.book
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn reentry_policy(&self) -> ReentryPolicy {
        self.policy
    }

    /// Moves "today", e.g. when the session crosses midnight.
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if self.today != today {
            debug!(from = %self.today, to = %today, "refresh today");
            self.today = today;
        }
    }

    /// The date and time being picked on the date screen.
    pub fn date_picker(&self) -> &DatePicker {
        &self.date_picker
    }

    /// The service choices being edited on the service screen.
    pub fn service_draft(&self) -> &ServiceSelection {
        &self.service_draft
    }

    /// The feedback being written, set on the submit feedback screen.
    pub fn feedback_draft(&self) -> Option<&FeedbackDraft> {
        self.feedback.as_ref()
    }

    /// Registers a listener called with every accepted feedback.
    pub fn on_feedback_submitted(&mut self, listener: impl FnMut(&FeedbackSubmission) + 'static) {
        self.feedback_listeners.push(Box::new(listener));
    }

    /// Starts a new booking from the appointment list.
    pub fn book_appointment(&mut self) -> FlowSnapshot {
        if !self.expect_screen(Screen::AppointmentList, "book appointment") {
            return self.snapshot();
        }

        match self.policy {
            ReentryPolicy::Discard => self.selection = BookingSelection::default(),
            ReentryPolicy::Resume if !self.selection.is_empty() => {
                debug!("resume previous booking");
            }
            ReentryPolicy::Resume => {}
        }
        self.go(Screen::SelectBranch);
        self.snapshot()
    }

    /// Picks the branch with the given id.
    pub fn choose_branch(&mut self, id: u32) -> FlowSnapshot {
        if !self.expect_screen(Screen::SelectBranch, "choose branch") {
            return self.snapshot();
        }

        match self.catalog.branch(id) {
            Some(branch) => {
                self.selection.branch = Some(branch.clone());
                self.go(Screen::SelectStylist);
            }
            None => warn!(id, "unknown branch, ignored"),
        }
        self.snapshot()
    }

    /// Picks the stylist with the given id.
    pub fn choose_stylist(&mut self, id: u32) -> FlowSnapshot {
        if !self.expect_screen(Screen::SelectStylist, "choose stylist") {
            return self.snapshot();
        }

        match self.catalog.stylist(id) {
            Some(stylist) => {
                self.selection.stylist = Some(stylist.clone());
                self.go(Screen::SelectDate);
            }
            None => warn!(id, "unknown stylist, ignored"),
        }
        self.snapshot()
    }

    /// Shows the next month in the calendar.
    pub fn show_next_month(&mut self) -> FlowSnapshot {
        if self.expect_screen(Screen::SelectDate, "show next month") {
            self.date_picker.visible_month = self.date_picker.visible_month.next();
        }
        self.snapshot()
    }

    /// Shows the previous month in the calendar.
    pub fn show_prev_month(&mut self) -> FlowSnapshot {
        if self.expect_screen(Screen::SelectDate, "show previous month") {
            self.date_picker.visible_month = self.date_picker.visible_month.prev();
        }
        self.snapshot()
    }

    /// Highlights a day, days before today are refused.
    pub fn pick_date(
        &mut self,
        date: NaiveDate,
        prompter: &mut dyn Prompter,
    ) -> Result<FlowSnapshot, FlowError> {
        if !self.expect_screen(Screen::SelectDate, "pick date") {
            return Ok(self.snapshot());
        }

        if date < self.today {
            return Err(self.reject(FlowError::PastDateSelected, prompter));
        }

        self.date_picker.date = date;
        self.date_picker.visible_month = YearMonth::from_date(date);
        Ok(self.snapshot())
    }

    /// Highlights a time slot, slots not offered are ignored.
    pub fn pick_time(&mut self, slot: TimeSlot) -> FlowSnapshot {
        if !self.expect_screen(Screen::SelectDate, "pick time") {
            return self.snapshot();
        }

        if self.catalog.has_time_slot(slot) {
            self.date_picker.time = Some(slot);
        } else {
            warn!(%slot, "time slot not offered, ignored");
        }
        self.snapshot()
    }

    /// The calendar of the visible month.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.date_picker.visible_month,
            self.today,
            self.date_picker.date,
        )
    }

    /// Accepts the picked date and time.
    pub fn confirm_date(&mut self, prompter: &mut dyn Prompter) -> Result<FlowSnapshot, FlowError> {
        if !self.expect_screen(Screen::SelectDate, "confirm date") {
            return Ok(self.snapshot());
        }

        let Some(time) = self.date_picker.time else {
            return Err(self.reject(FlowError::MissingTimeSelection, prompter));
        };
        if self.date_picker.date < self.today {
            return Err(self.reject(FlowError::PastDateSelected, prompter));
        }

        self.selection.date = Some(self.date_picker.date);
        self.selection.time = Some(time);
        self.go(Screen::SelectService);
        Ok(self.snapshot())
    }

    /// Changes the choice of one service category.
    pub fn choose_service(&mut self, category: ServiceCategory, choice: ServiceChoice) -> FlowSnapshot {
        if !self.expect_screen(Screen::SelectService, "choose service") {
            return self.snapshot();
        }

        match &choice {
            ServiceChoice::Selected(option) if !category.offers(option) => {
                warn!(%category, %option, "service option not offered, ignored");
            }
            _ => self.service_draft.set(category, choice),
        }
        self.snapshot()
    }

    /// Accepts the service choices, at least one is required.
    pub fn confirm_services(
        &mut self,
        prompter: &mut dyn Prompter,
    ) -> Result<FlowSnapshot, FlowError> {
        if !self.expect_screen(Screen::SelectService, "confirm services") {
            return Ok(self.snapshot());
        }

        if !self.service_draft.has_any() {
            return Err(self.reject(FlowError::NoServiceSelected, prompter));
        }

        self.selection.services = self.service_draft.clone();
        self.go(Screen::SelectConfirmation);
        Ok(self.snapshot())
    }

    /// Sends the booking, it shows up as a pending appointment.
    pub fn confirm_booking(
        &mut self,
        prompter: &mut dyn Prompter,
    ) -> Result<FlowSnapshot, FlowError> {
        if !self.expect_screen(Screen::SelectConfirmation, "confirm booking") {
            return Ok(self.snapshot());
        }

        if let Some(missing) = self.selection.missing_field() {
            return Err(self.reject(FlowError::IncompleteSelection { missing }, prompter));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let Some(appointment) = Appointment::from_selection(id, &self.selection) else {
            let missing = "booking";
            return Err(self.reject(FlowError::IncompleteSelection { missing }, prompter));
        };

        info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            branch = %appointment.branch,
            stylist = %appointment.stylist,
            "booking committed"
        );
        self.book.add(appointment);
        prompter.acknowledge(&Notice::BookingConfirmed);

        self.selection = BookingSelection::default();
        self.go(Screen::AppointmentList);
        Ok(self.snapshot())
    }

    /// Cancels an upcoming appointment after asking the customer.
    pub fn cancel_appointment(&mut self, id: &str, prompter: &mut dyn Prompter) -> FlowSnapshot {
        if !self.expect_screen(Screen::AppointmentList, "cancel appointment") {
            return self.snapshot();
        }

        if self.book.appointment(id).is_none() {
            warn!(id, "unknown appointment, ignored");
            return self.snapshot();
        }

        if prompter.confirm(&Question::CancelAppointment(id.to_string()))
            && self.book.cancel(id).is_some()
        {
            info!(id, "appointment cancelled");
        }
        self.snapshot()
    }

    /// Opens the feedback form of a past appointment.
    pub fn choose_feedback_appointment(&mut self, id: &str) -> FlowSnapshot {
        if !self.expect_screen(Screen::ChooseFeedback, "choose feedback appointment") {
            return self.snapshot();
        }

        if self.book.past_appointment(id).is_some() {
            self.feedback = Some(FeedbackDraft::new(id));
            self.go(Screen::SubmitFeedback);
        } else {
            warn!(id, "unknown past appointment, ignored");
        }
        self.snapshot()
    }

    /// Sets the stars of the feedback, clamped to 0..=5.
    pub fn set_rating(&mut self, stars: u8) -> FlowSnapshot {
        if let Some(draft) = self.feedback_mut("set rating") {
            draft.set_rating(stars);
        }
        self.snapshot()
    }

    /// Replaces the feedback text.
    pub fn set_feedback_text(&mut self, text: impl Into<String>) -> FlowSnapshot {
        if let Some(draft) = self.feedback_mut("set feedback text") {
            draft.text = text.into();
        }
        self.snapshot()
    }

    /// Sends the feedback to the registered listeners, a rating is required.
    pub fn submit_feedback(
        &mut self,
        prompter: &mut dyn Prompter,
    ) -> Result<FlowSnapshot, FlowError> {
        let Some(draft) = self.feedback_mut("submit feedback") else {
            return Ok(self.snapshot());
        };

        let submission = match draft.submit() {
            Ok(a) => a,
            Err(e) => return Err(self.reject(e, prompter)),
        };

        info!(
            appointment_id = %submission.appointment_id,
            rating = submission.rating,
            "feedback submitted"
        );
        for listener in &mut self.feedback_listeners {
            listener(&submission);
        }
        prompter.acknowledge(&Notice::FeedbackSubmitted);

        self.go(Screen::ChooseFeedback);
        Ok(self.snapshot())
    }

    /// Goes one step back, asking first where input would be lost.
    pub fn back(&mut self, prompter: &mut dyn Prompter) -> FlowSnapshot {
        let to = match self.screen {
            Screen::AppointmentList | Screen::ChooseFeedback => None,
            Screen::SelectBranch => prompter
                .confirm(&Question::DiscardBooking)
                .then_some(Screen::AppointmentList),
            Screen::SelectStylist => Some(Screen::SelectBranch),
            Screen::SelectDate => Some(Screen::SelectStylist),
            Screen::SelectService => Some(Screen::SelectDate),
            Screen::SelectConfirmation => Some(Screen::SelectService),
            Screen::Notification => Some(Screen::AppointmentList),
            Screen::SubmitFeedback => {
                let dirty = self
                    .feedback
                    .as_ref()
                    .is_some_and(FeedbackDraft::has_unsaved_changes);
                (!dirty || prompter.confirm(&Question::DiscardFeedback))
                    .then_some(Screen::ChooseFeedback)
            }
        };

        match to {
            Some(to) => self.go(to),
            None => debug!(screen = ?self.screen, "back ignored"),
        }
        self.snapshot()
    }

    /// Follows the bottom navigation bar, the booking in progress is kept.
    pub fn navigate(&mut self, target: NavTarget) -> FlowSnapshot {
        self.go(target.screen());
        self.snapshot()
    }

    fn go(&mut self, to: Screen) {
        let from = self.screen;
        debug!(?from, ?to, "screen transition");

        if from == Screen::SubmitFeedback && to != Screen::SubmitFeedback {
            self.feedback = None;
        }

        match to {
            Screen::SelectDate => {
                let date = self.selection.date.unwrap_or(self.today);
                self.date_picker = DatePicker::new(date, self.selection.time);
            }
            Screen::SelectService => self.service_draft = self.selection.services.clone(),
            _ => {}
        }

        self.screen = to;
    }

    fn expect_screen(&self, screen: Screen, event: &str) -> bool {
        let ok = self.screen == screen;
        if !ok {
            warn!(current = ?self.screen, event, "event not applicable, ignored");
        }
        ok
    }

    fn feedback_mut(&mut self, event: &str) -> Option<&mut FeedbackDraft> {
        if !self.expect_screen(Screen::SubmitFeedback, event) {
            return None;
        }
        self.feedback.as_mut()
    }

    fn reject(&self, err: FlowError, prompter: &mut dyn Prompter) -> FlowError {
        debug!(screen = ?self.screen, %err, "operation rejected");
        prompter.acknowledge(&Notice::Rejected(err.clone()));
        err
    }
}
