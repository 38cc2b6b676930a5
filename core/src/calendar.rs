// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

/// Number of columns in a calendar row, the week starts on Sunday.
pub const DAYS_PER_WEEK: usize = 7;

/// A month of a specific year, anchored at its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Creates a year-month, returns `None` if the month is not within 1..=12 or the year is
    /// out of the supported range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// The year of the month.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month number, 1 for January.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// The given day of the month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.0.with_day(day)
    }

    /// Number of days in the month.
    pub fn len(&self) -> u32 {
        match self.0.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.0).num_days() as u32,
            None => 31, // December of the last representable year
        }
    }

    /// The following month, saturating at the last representable month.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    /// The preceding month, saturating at the first representable month.
    #[must_use]
    pub fn prev(&self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// Human readable title, e.g. "August 2025".
    pub fn title(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = chrono::ParseError;

    /// Parses the `YYYY-MM` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map(Self)
    }
}

/// Column of the date in a Sunday-first week, Sunday is 0.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// A single day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// The date of the cell.
    pub date: NaiveDate,

    /// Day of month, 1..=31.
    pub day: u32,

    /// Always true for cells produced by [`MonthGrid::build`], days of adjacent months are left
    /// empty.
    pub is_in_current_month: bool,

    /// The day lies before today.
    pub is_past: bool,

    /// The day is today.
    pub is_today: bool,

    /// The day is the currently selected date.
    pub is_selected: bool,

    /// The day can be picked for an appointment.
    pub is_selectable: bool,
}

impl CalendarCell {
    fn new(month: YearMonth, date: NaiveDate, today: NaiveDate, selected: NaiveDate) -> Self {
        let is_past = date < today;
        Self {
            date,
            day: date.day(),
            is_in_current_month: YearMonth::from_date(date) == month,
            is_past,
            is_today: date == today,
            is_selected: date == selected,
            is_selectable: !is_past,
        }
    }
}

/// One week of the grid, empty slots are `None`.
pub type WeekRow = [Option<CalendarCell>; DAYS_PER_WEEK];

/// Week-row layout of a calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Lays out the month in Sunday-first rows, marking past, today and selected days.
    pub fn build(month: YearMonth, today: NaiveDate, selected: NaiveDate) -> Self {
        let leading = weekday_index(month.first_day());
        let days = month.len() as usize;
        let row_count = (leading + days).div_ceil(DAYS_PER_WEEK);

        let mut rows: Vec<WeekRow> = vec![[None; DAYS_PER_WEEK]; row_count];
        for (offset, date) in month.first_day().iter_days().take(days).enumerate() {
            let slot = leading + offset;
            rows[slot / DAYS_PER_WEEK][slot % DAYS_PER_WEEK] =
                Some(CalendarCell::new(month, date, today, selected));
        }

        Self { month, rows }
    }

    /// The month this grid describes.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The week rows, top to bottom.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// All non-empty cells in calendar order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flat_map(|row| row.iter().flatten())
    }

    /// The `(row, column)` position of the given day of month.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(i, row)| {
            row.iter()
                .position(|cell| cell.is_some_and(|c| c.day == day))
                .map(|j| (i, j))
        })
    }

    /// The cell of the given date, if it belongs to this month.
    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells().find(|c| c.date == date)
    }
}

/// Builds the grid of `month`, see [`MonthGrid::build`].
pub fn build_month_grid(month: YearMonth, today: NaiveDate, selected: NaiveDate) -> MonthGrid {
    MonthGrid::build(month, today, selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_holds_every_day_once_and_starts_on_weekday_of_first() {
        let today = date(2025, 8, 15);
        for year in 1999..=2031 {
            for m in 1..=12 {
                let month = YearMonth::new(year, m).unwrap();
                let grid = MonthGrid::build(month, today, today);

                assert_eq!(grid.cells().count() as u32, month.len(), "{month}");
                let (row, col) = grid.position_of(1).unwrap();
                assert_eq!(row, 0);
                assert_eq!(col, weekday_index(month.first_day()), "{month}");
                assert!(grid.rows().iter().all(|r| r.len() == DAYS_PER_WEEK));
            }
        }
    }

    #[test]
    fn test_august_2025_starts_on_friday() {
        let month: YearMonth = "2025-08".parse().unwrap();
        let grid = MonthGrid::build(month, date(2025, 8, 15), date(2025, 8, 20));

        assert_eq!(grid.position_of(1), Some((0, 5)));
        assert_eq!(grid.rows().len(), 6); // 5 leading + 31 days = 36 slots
        assert_eq!(grid.position_of(31), Some((5, 0)));
        assert!(grid.rows()[0][..5].iter().all(Option::is_none));
    }

    #[test]
    fn test_february_starting_on_sunday_fills_four_rows() {
        let month = YearMonth::new(2026, 2).unwrap();
        let grid = MonthGrid::build(month, date(2026, 1, 1), date(2026, 1, 1));

        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.position_of(1), Some((0, 0)));
        assert_eq!(grid.position_of(28), Some((3, 6)));
    }

    #[test]
    fn test_leap_february_has_29_days() {
        let month = YearMonth::new(2024, 2).unwrap();
        assert_eq!(month.len(), 29);
        assert_eq!(YearMonth::new(2100, 2).unwrap().len(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().len(), 29);
    }

    #[test]
    fn test_past_days_are_not_selectable() {
        let today = date(2025, 8, 15);
        let grid = MonthGrid::build(YearMonth::from_date(today), today, today);

        for cell in grid.cells() {
            assert_eq!(cell.is_past, cell.date < today);
            assert_eq!(cell.is_selectable, cell.date >= today);
            assert_eq!(cell.is_today, cell.day == 15);
            assert!(cell.is_in_current_month);
        }
    }

    #[test]
    fn test_whole_month_in_the_past_or_future() {
        let today = date(2025, 8, 15);

        let past = MonthGrid::build(YearMonth::new(2025, 7).unwrap(), today, today);
        assert!(past.cells().all(|c| c.is_past && !c.is_selectable));

        let future = MonthGrid::build(YearMonth::new(2025, 9).unwrap(), today, today);
        assert!(future.cells().all(|c| !c.is_past && c.is_selectable));
        assert!(future.cells().all(|c| !c.is_today));
    }

    #[test]
    fn test_marks_selected_day_only() {
        let today = date(2025, 8, 15);
        let selected = date(2025, 8, 20);
        let grid = MonthGrid::build(YearMonth::from_date(today), today, selected);

        let marked: Vec<_> = grid.cells().filter(|c| c.is_selected).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, selected);
        assert!(grid.cell(selected).unwrap().is_selected);

        // Selected date in another month marks nothing here
        let grid = MonthGrid::build(YearMonth::new(2025, 9).unwrap(), today, selected);
        assert!(grid.cells().all(|c| !c.is_selected));
        assert!(grid.cell(selected).is_none());
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);

        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn test_parses_and_formats_year_month() {
        let month: YearMonth = "2025-08".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 8);
        assert_eq!(month.to_string(), "2025-08");
        assert_eq!(month.title(), "August 2025");

        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("August".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_rejects_invalid_month_numbers() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_from_date_anchors_to_first_day() {
        let month = YearMonth::from_date(date(2025, 8, 31));
        assert_eq!(month.first_day(), date(2025, 8, 1));
        assert_eq!(month.day(31), Some(date(2025, 8, 31)));
        assert_eq!(month.day(32), None);
    }
}
