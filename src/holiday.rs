//! Holidays defined in either calendar and matched against solar dates.
//!
//! A holiday is a day and month in the solar or the lunar calendar, either
//! recurring every year or tied to one year. Lunar holidays are matched by
//! converting the solar date with [`LunarDate::from_date`], so months are the
//! position of the month in the lunar year (see [`crate::lunar`]).
//!
//! # Example
//!
//! ```
//! use amlich::Date;
//! use amlich::holiday::Holiday;
//!
//! let tet = Holiday::lunar("Tết Nguyên Đán", 1, 1);
//! let today = Date::from_gregorian(1, 2, 2024).unwrap();
//!
//! assert!(tet.occurs_on(Date::from_gregorian(10, 2, 2024).unwrap()));
//! assert_eq!(Some(9), tet.days_until(today));
//! ```

use crate::date::{CalendarSystem, Date, days_in_month};
use crate::error::{Error, Result};
use crate::lunar::{self, LunarDate};

/// Number of years searched ahead for the next occurrence of a recurring
/// holiday. Covers 29 February and the 13th lunar month.
pub const YEARS_AHEAD: i32 = 8;

/// A holiday record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    pub name: String,
    pub description: String,
    pub day: u32,
    pub month: u32,
    /// `None` for a holiday recurring every year.
    pub year: Option<i32>,
    pub calendar: CalendarSystem,
}

impl Holiday {
    /// Creates a holiday recurring every year on a solar date.
    pub fn solar(name: impl Into<String>, day: u32, month: u32) -> Self {
        Self::new(name, day, month, CalendarSystem::Solar)
    }
    /// Creates a holiday recurring every year on a lunar date.
    pub fn lunar(name: impl Into<String>, day: u32, month: u32) -> Self {
        Self::new(name, day, month, CalendarSystem::Lunar)
    }
    fn new(name: impl Into<String>, day: u32, month: u32, calendar: CalendarSystem) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            day,
            month,
            year: None,
            calendar,
        }
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
    /// Restricts the holiday to one year of its calendar.
    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Checks the day and month are valid in the holiday's calendar.
    ///
    /// Recurring solar holidays may fall on 29 February. Holidays tied to a
    /// year must name an existing date of that year.
    pub fn validate(&self) -> Result<()> {
        let valid = match (self.calendar, self.year) {
            (CalendarSystem::Solar, None) => {
                (1..=12).contains(&self.month)
                    && (1..=days_in_month(self.month, 2000)).contains(&self.day)
            }
            (CalendarSystem::Solar, Some(year)) => {
                Date::from_gregorian(self.day, self.month, year).is_ok()
            }
            (CalendarSystem::Lunar, None) => {
                LunarDate::new(self.day, self.month, 0, false).is_ok()
            }
            (CalendarSystem::Lunar, Some(year)) => {
                lunar::lunar_to_solar(self.day, self.month, year, false).is_ok()
            }
        };
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidHoliday(format!(
                "{}: no {} date with day {} and month {}{}",
                self.name,
                self.calendar,
                self.day,
                self.month,
                self.year.map(|y| format!(" in {}", y)).unwrap_or_default(),
            )))
        }
    }

    /// Returns `true` if the holiday falls on `date`.
    pub fn occurs_on(&self, date: Date) -> bool {
        let (day, month, year) = match self.calendar {
            CalendarSystem::Solar => date.gregorian(),
            CalendarSystem::Lunar => date.to_lunar().dmy(),
        };
        day == self.day && month == self.month && self.year.is_none_or(|y| y == year)
    }

    /// Returns the first date on or after `from` the holiday falls on.
    ///
    /// Recurring holidays are searched [`YEARS_AHEAD`] years ahead. A lunar
    /// day 30 is skipped in years where that month has 29 days.
    pub fn next_occurrence(&self, from: Date) -> Option<Date> {
        let first_year = match self.calendar {
            CalendarSystem::Solar => from.year(),
            CalendarSystem::Lunar => from.to_lunar().year,
        };
        let years = match self.year {
            Some(year) => year..=year,
            None => first_year..=first_year + YEARS_AHEAD,
        };
        years
            .filter_map(|year| self.date_in(year))
            .find(|&date| date >= from && self.occurs_on(date))
    }

    /// Returns the number of days from `from` to the next occurrence.
    pub fn days_until(&self, from: Date) -> Option<i32> {
        self.next_occurrence(from).map(|date| date - from)
    }

    fn date_in(&self, year: i32) -> Option<Date> {
        match self.calendar {
            CalendarSystem::Solar => Date::from_gregorian(self.day, self.month, year).ok(),
            CalendarSystem::Lunar => lunar::lunar_to_solar(self.day, self.month, year, false).ok(),
        }
    }
}

/// Returns the holidays falling on `date`.
pub fn holidays_on(holidays: &[Holiday], date: Date) -> impl Iterator<Item = &Holiday> {
    holidays.iter().filter(move |h| h.occurs_on(date))
}

/// Returns the next occurrence of each holiday on or after `from`, earliest
/// first, keeping at most `limit` of them. Holidays with no occurrence within
/// [`YEARS_AHEAD`] years are left out; ties keep the order of `holidays`.
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::holiday::{self, Holiday};
///
/// let holidays = [
///     Holiday::solar("Quốc Khánh", 2, 9),
///     Holiday::lunar("Tết Nguyên Đán", 1, 1),
/// ];
/// let today = Date::from_gregorian(1, 1, 2024).unwrap();
/// let next = holiday::upcoming(&holidays, today, 1);
///
/// assert_eq!("Tết Nguyên Đán", next[0].1.name);
/// assert_eq!("2024-02-10", next[0].0.iso_gregorian());
/// ```
pub fn upcoming(holidays: &[Holiday], from: Date, limit: usize) -> Vec<(Date, &Holiday)> {
    let mut found: Vec<_> = holidays
        .iter()
        .filter_map(|h| h.next_occurrence(from).map(|date| (date, h)))
        .collect();
    found.sort_by_key(|&(date, _)| date);
    found.truncate(limit);
    found
}

/// Returns the holidays of `calendar` defined in `month` of that calendar.
pub fn holidays_in_month(
    holidays: &[Holiday],
    calendar: CalendarSystem,
    month: u32,
) -> impl Iterator<Item = &Holiday> {
    holidays
        .iter()
        .filter(move |h| h.calendar == calendar && h.month == month)
}
