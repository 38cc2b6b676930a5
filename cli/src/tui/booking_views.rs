// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph};
use salonbook_core::{
    Appointment, AppointmentStatus, MAX_RATING, Screen, ServiceCategory, ServiceChoice, TimeSlot,
};

use crate::tui::booking_store::BookingStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_calendar::DateTimePicker;
use crate::tui::component_form::{Access, Form, FormItem, Input, RadioGroup};
use crate::tui::component_list::{ListEntry, ListPicker, ListSource};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};

pub type View = Box<dyn Component<BookingStore>>;

/// Creates the view shown for the screen.
pub fn new_view(screen: Screen) -> View {
    let title = screen.title();
    match screen {
        Screen::AppointmentList => Box::new(SinglePage::new(
            title,
            &[("Move", "↑↓"), ("Book", "b"), ("Cancel", "x")],
            AppointmentList::new(),
        )),
        Screen::SelectBranch => Box::new(SinglePage::new(
            title,
            &[("Move", "↑↓"), ("Choose", "Enter")],
            ListPicker::<BookingStore, BranchSource>::new("No branch available."),
        )),
        Screen::SelectStylist => Box::new(SinglePage::new(
            title,
            &[("Move", "↑↓"), ("Choose", "Enter")],
            ListPicker::<BookingStore, StylistSource>::new("No stylist available."),
        )),
        Screen::SelectDate => Box::new(SinglePage::new(
            title,
            &[
                ("Day", "←→↑↓"),
                ("Month", "PgUp/PgDn"),
                ("Time", "Tab"),
                ("Next", "Enter"),
            ],
            DateTimePicker::new(),
        )),
        Screen::SelectService => Box::new(SinglePage::new(
            title,
            &[("Field", "↑↓"), ("Option", "←→"), ("Next", "Enter")],
            new_service_form(),
        )),
        Screen::SelectConfirmation => Box::new(SinglePage::new(
            title,
            &[("Book", "Enter")],
            Confirmation,
        )),
        Screen::Notification => Box::new(SinglePage::new(
            title,
            &[("Move", "↑↓")],
            ListPicker::<BookingStore, NotificationSource>::new("No notifications."),
        )),
        Screen::ChooseFeedback => Box::new(SinglePage::new(
            title,
            &[("Move", "↑↓"), ("Review", "Enter")],
            ListPicker::<BookingStore, PastSource>::new("No past appointments."),
        )),
        Screen::SubmitFeedback => Box::new(SinglePage::new(
            title,
            &[("Field", "↑↓"), ("Stars", "←→"), ("Submit", "Enter")],
            FeedbackForm::new(),
        )),
    }
}

fn when(date: chrono::NaiveDate, time: TimeSlot) -> String {
    format!("{}, {time}", date.format("%a, %d %b %Y"))
}

fn status_color(status: AppointmentStatus) -> Color {
    match status {
        AppointmentStatus::Approved => Color::Green,
        AppointmentStatus::Pending => Color::Yellow,
        AppointmentStatus::Rejected => Color::Red,
    }
}

struct UpcomingSource;

impl UpcomingSource {
    fn appointment_at(store: &RefCell<BookingStore>, index: usize) -> Option<Appointment> {
        store.borrow().flow.appointments().upcoming().get(index).cloned()
    }
}

impl ListSource<BookingStore> for UpcomingSource {
    fn entries(store: &RefCell<BookingStore>) -> Vec<ListEntry> {
        let store = store.borrow();
        store
            .flow
            .appointments()
            .upcoming()
            .iter()
            .map(|a| {
                ListEntry::new(when(a.date, a.time))
                    .detail(format!("{} with {}", a.branch, a.stylist))
                    .detail(a.summary())
                    .detail(format!("Status: {}", a.status))
                    .color(status_color(a.status))
            })
            .collect()
    }

    fn choose(_: &mut Dispatcher, _: &RefCell<BookingStore>, _: usize) -> Option<Message> {
        None
    }
}

/// Upcoming appointments, the entry point of a booking.
struct AppointmentList {
    list: ListPicker<BookingStore, UpcomingSource>,
}

impl AppointmentList {
    fn new() -> Self {
        Self {
            list: ListPicker::new("No upcoming appointments, press b to book one."),
        }
    }
}

impl Component<BookingStore> for AppointmentList {
    fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        self.list.render(store, area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('b') => {
                dispatcher.dispatch(Action::BookAppointment);
                Some(Message::Handled)
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(a) = UpcomingSource::appointment_at(store, self.list.selected()) {
                    dispatcher.dispatch(Action::CancelAppointment(a.id));
                    self.list.activate(dispatcher, store);
                }
                Some(Message::Handled)
            }
            _ => self.list.on_key(dispatcher, store, area, event),
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BookingStore>) {
        self.list.activate(dispatcher, store);
    }
}

struct BranchSource;

impl ListSource<BookingStore> for BranchSource {
    fn entries(store: &RefCell<BookingStore>) -> Vec<ListEntry> {
        let store = store.borrow();
        store
            .flow
            .catalog()
            .branches()
            .iter()
            .map(|a| {
                let entry = ListEntry::new(&a.name)
                    .detail(&a.address)
                    .detail(format!("Tel: {}", a.phone_number));
                a.hours.lines().fold(entry, |entry, line| entry.detail(line))
            })
            .collect()
    }

    fn choose(
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        index: usize,
    ) -> Option<Message> {
        let id = store.borrow().flow.catalog().branches().get(index)?.id;
        dispatcher.dispatch(Action::ChooseBranch(id));
        Some(Message::Handled)
    }
}

struct StylistSource;

impl ListSource<BookingStore> for StylistSource {
    fn entries(store: &RefCell<BookingStore>) -> Vec<ListEntry> {
        let store = store.borrow();
        store
            .flow
            .catalog()
            .stylists()
            .iter()
            .map(|a| ListEntry::new(&a.name))
            .collect()
    }

    fn choose(
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        index: usize,
    ) -> Option<Message> {
        let id = store.borrow().flow.catalog().stylists().get(index)?.id;
        dispatcher.dispatch(Action::ChooseStylist(id));
        Some(Message::Handled)
    }
}

struct NotificationSource;

impl ListSource<BookingStore> for NotificationSource {
    fn entries(store: &RefCell<BookingStore>) -> Vec<ListEntry> {
        let store = store.borrow();
        store
            .flow
            .appointments()
            .notifications()
            .iter()
            .map(|a| {
                let color = if a.is_cancelled { Color::Red } else { Color::Cyan };
                ListEntry::new(format!("{} {}", a.title, a.subtitle))
                    .detail(when(a.date, a.time))
                    .detail(format!("{} with {}", a.branch, a.stylist))
                    .detail(&a.service)
                    .color(color)
            })
            .collect()
    }

    fn choose(_: &mut Dispatcher, _: &RefCell<BookingStore>, _: usize) -> Option<Message> {
        Some(Message::Handled)
    }
}

struct PastSource;

impl ListSource<BookingStore> for PastSource {
    fn entries(store: &RefCell<BookingStore>) -> Vec<ListEntry> {
        let store = store.borrow();
        store
            .flow
            .appointments()
            .past()
            .iter()
            .map(|a| {
                ListEntry::new(when(a.date, a.time))
                    .detail(format!("{} with {}", a.branch, a.stylist))
                    .detail(a.summary())
            })
            .collect()
    }

    fn choose(
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        index: usize,
    ) -> Option<Message> {
        let id = store.borrow().flow.appointments().past().get(index)?.id.clone();
        dispatcher.dispatch(Action::ChooseFeedbackAppointment(id));
        Some(Message::Handled)
    }
}

macro_rules! service_access {
    ($acc: ident, $category: expr) => {
        struct $acc;

        impl Access<BookingStore, ServiceChoice> for $acc {
            fn get(store: &RefCell<BookingStore>) -> ServiceChoice {
                store.borrow().flow.service_draft().get($category).clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: ServiceChoice) -> bool {
                dispatcher.dispatch(Action::ChooseService($category, value));
                true
            }
        }
    };
}

service_access!(CutAccess, ServiceCategory::Cut);
service_access!(ColorAccess, ServiceCategory::Color);
service_access!(TreatmentAccess, ServiceCategory::HairTreatment);
service_access!(StylingAccess, ServiceCategory::Styling);

fn new_service_group<A>(category: ServiceCategory) -> Box<dyn FormItem<BookingStore>>
where
    A: Access<BookingStore, ServiceChoice> + 'static,
{
    let values: Vec<_> = std::iter::once(ServiceChoice::NotSelected)
        .chain(category.options().iter().map(|&a| ServiceChoice::selected(a)))
        .collect();
    let options = values.iter().map(ToString::to_string).collect();
    Box::new(RadioGroup::<BookingStore, ServiceChoice, A>::new(
        category, values, options,
    ))
}

fn new_service_form() -> Form<BookingStore> {
    let items = vec![
        new_service_group::<CutAccess>(ServiceCategory::Cut),
        new_service_group::<ColorAccess>(ServiceCategory::Color),
        new_service_group::<TreatmentAccess>(ServiceCategory::HairTreatment),
        new_service_group::<StylingAccess>(ServiceCategory::Styling),
    ];
    Form::new(items, Action::ConfirmServices)
}

/// Summary of the booking before it is sent.
struct Confirmation;

impl Component<BookingStore> for Confirmation {
    fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let selection = store.flow.selection();
        let field = |label: &'static str, value: String| {
            Line::from(vec![format!("{label:>10}: ").fg(Color::Gray), value.bold()])
        };

        let lines = vec![
            field(
                "Branch",
                selection.branch.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            ),
            field(
                "Stylist",
                selection.stylist.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            ),
            field(
                "Date",
                selection.date.map(|a| a.format("%a, %d %b %Y").to_string()).unwrap_or_default(),
            ),
            field(
                "Time",
                selection.time.map(|a| a.to_string()).unwrap_or_default(),
            ),
            field("Services", selection.services.labels().join(" | ")),
        ];

        Paragraph::new(lines)
            .block(Block::new().padding(Padding::uniform(1)))
            .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<BookingStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Enter => {
                dispatcher.dispatch(Action::ConfirmBooking);
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}

/// Stars of the feedback, set with arrows or digits.
struct RatingItem {
    active: bool,
}

impl RatingItem {
    fn rating(store: &RefCell<BookingStore>) -> u8 {
        store.borrow().flow.feedback_draft().map_or(0, |a| a.rating)
    }
}

impl Component<BookingStore> for RatingItem {
    fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        let rating = Self::rating(store);
        let stars: String = (1..=MAX_RATING)
            .map(|i| if i <= rating { '★' } else { '☆' })
            .collect();
        Line::from(vec![
            stars.fg(Color::Yellow),
            format!("  {rating}/{MAX_RATING}").fg(Color::Gray),
        ])
        .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let rating = Self::rating(store);
        let stars = match event.code {
            KeyCode::Left => rating.saturating_sub(1),
            KeyCode::Right => (rating + 1).min(MAX_RATING),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(d) if d <= u32::from(MAX_RATING) => d as u8,
                _ => return Some(Message::Handled),
            },
            _ => return None,
        };
        dispatcher.dispatch(Action::SetRating(stars));
        Some(Message::Handled)
    }

    fn activate(&mut self, _: &mut Dispatcher, _: &RefCell<BookingStore>) {
        self.active = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _: &RefCell<BookingStore>) {
        self.active = false;
    }
}

impl FormItem<BookingStore> for RatingItem {
    fn item_title(&self) -> &str {
        "Rating"
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

struct FeedbackTextAccess;

impl Access<BookingStore, String> for FeedbackTextAccess {
    fn get(store: &RefCell<BookingStore>) -> String {
        store
            .borrow()
            .flow
            .feedback_draft()
            .map(|a| a.text.clone())
            .unwrap_or_default()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::SetFeedbackText(value));
        true
    }
}

/// The reviewed appointment above the rating form.
struct FeedbackForm {
    form: Form<BookingStore>,
}

impl FeedbackForm {
    fn new() -> Self {
        let items: Vec<Box<dyn FormItem<BookingStore>>> = vec![
            Box::new(RatingItem { active: false }),
            Box::new(Input::<BookingStore, FeedbackTextAccess>::new("Comments")),
        ];
        Self {
            form: Form::new(items, Action::SubmitFeedback),
        }
    }

    fn split(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area)
    }
}

impl Component<BookingStore> for FeedbackForm {
    fn render(&self, store: &RefCell<BookingStore>, area: Rect, buf: &mut Buffer) {
        let [header, body] = Self::split(area);
        {
            let store = store.borrow();
            let book = store.flow.appointments();
            let past = store
                .flow
                .feedback_draft()
                .and_then(|a| book.past_appointment(&a.appointment_id));
            if let Some(a) = past {
                Paragraph::new(vec![
                    Line::from(when(a.date, a.time).bold()),
                    Line::from(format!("{} with {} | {}", a.branch, a.stylist, a.summary()))
                        .fg(Color::Gray),
                ])
                .render(header.inner(Margin::new(1, 0)), buf);
            }
        }
        self.form.render(store, body, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<BookingStore>, area: Rect) -> Option<(u16, u16)> {
        let [_, body] = Self::split(area);
        self.form.get_cursor_position(store, body)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BookingStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let [_, body] = Self::split(area);
        self.form.on_key(dispatcher, store, body, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BookingStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BookingStore>) {
        self.form.deactivate(dispatcher, store);
    }
}
