//! Dual-calendar month views.

use crate::date::{Date, days_in_month};
use crate::error::{Error, Result};
use crate::lunar::LunarDate;

/// One day of a month view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayCell {
    pub date: Date,
    pub lunar: LunarDate,
}

/// The days of a Gregorian month, each annotated with its lunar date.
///
/// # Example
///
/// ```
/// use amlich::calendar::MonthView;
///
/// let view = MonthView::new(2, 2024).unwrap();
/// assert_eq!(29, view.days.len());
/// assert_eq!(4, view.first_weekday()); // Thursday
/// assert_eq!((1, 1, 2024), view.days[9].lunar.dmy());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthView {
    pub month: u32,
    pub year: i32,
    pub days: Vec<DayCell>,
}

impl MonthView {
    /// Builds the view of `month` in `year`.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        let first = Date::from_gregorian(1, month, year)?;
        let days = (0..days_in_month(month, year) as i32)
            .map(|offset| {
                let date = first + offset;
                DayCell {
                    date,
                    lunar: date.to_lunar(),
                }
            })
            .collect();
        Ok(Self { month, year, days })
    }

    /// Day of week of the first day, `1..=7` from Monday.
    pub fn first_weekday(&self) -> u32 {
        self.days
            .first()
            .map(|cell| cell.date.day_of_week())
            .unwrap_or_default()
    }

    /// Days where a lunar month begins.
    pub fn lunar_month_starts(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|cell| cell.lunar.day == 1)
    }

    pub fn next(&self) -> Result<Self> {
        match self.month {
            12 => Self::new(1, self.year + 1),
            m => Self::new(m + 1, self.year),
        }
    }

    pub fn previous(&self) -> Result<Self> {
        match self.month {
            1 => Self::new(12, self.year - 1),
            m => Self::new(m - 1, self.year),
        }
    }

    /// Returns the cell of solar day `day`.
    pub fn day(&self, day: u32) -> Result<&DayCell> {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i as usize))
            .ok_or_else(|| Error::invalid_solar(day, self.month, self.year))
    }
}
