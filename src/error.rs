//! Error type shared by every fallible operation of the crate.

use crate::date::CalendarSystem;

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Day or month outside the range allowed by the calendar system, or a
    /// date outside the representable Julian day range.
    #[error("invalid {system} date: day {day}, month {month}, year {year}")]
    InvalidDate {
        system: CalendarSystem,
        day: u32,
        month: u32,
        year: i32,
    },

    /// Lunar month 13 was requested in a lunar year with only 12 lunations.
    #[error("lunar year {year} has no 13th month")]
    NoLeapMonth { year: i32 },

    #[error("invalid holiday: {0}")]
    InvalidHoliday(String),
}

impl Error {
    pub(crate) fn invalid_solar(day: u32, month: u32, year: i32) -> Self {
        Error::InvalidDate {
            system: CalendarSystem::Solar,
            day,
            month,
            year,
        }
    }

    pub(crate) fn invalid_lunar(day: u32, month: u32, year: i32) -> Self {
        Error::InvalidDate {
            system: CalendarSystem::Lunar,
            day,
            month,
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "invalid solar date: day 30, month 2, year 2024",
            Error::invalid_solar(30, 2, 2024).to_string()
        );
        assert_eq!(
            "invalid lunar date: day 31, month 1, year 2024",
            Error::invalid_lunar(31, 1, 2024).to_string()
        );
        assert_eq!(
            "lunar year 2024 has no 13th month",
            Error::NoLeapMonth { year: 2024 }.to_string()
        );
    }
}
