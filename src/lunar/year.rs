//! Locating the first day of a lunar year (Tết Nguyên Đán).

use std::ops::RangeInclusive;

use log::debug;

use super::ephemeris::{LUNATION_EPOCH, SYNODIC_MONTH, new_moon};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::julian::{JulianDay, gregorian_to_julian_day};

/// Opening of the Tết window, as `(day, month)` of the solar year. Lunar new
/// year is the first new moon at or after 00:00 UT of this day.
pub const TET_WINDOW_OPENS: (u32, u32) = (21, 1);

/// Lunar years that can be located: those holding the days a [`Date`] can
/// represent, from JDN 0 (1 January 4713 BC) to JDN `u32::MAX`.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -4713..=11_754_508;

/// The new moon beginning a lunar year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct YearStart {
    year: i32,
    lunation: i32,
    new_moon: JulianDay,
}

/// Finds the lunation starting lunar year `year`.
///
/// Fails with [`Error::InvalidDate`] if `year` is not in
/// [`SUPPORTED_YEARS`].
///
/// # Example
///
/// ```
/// use amlich::lunar::year::locate_year_start;
///
/// let start = locate_year_start(2024).unwrap();
/// assert_eq!(298, start.lunation());
/// assert!(locate_year_start(i32::MAX).is_err());
/// ```
pub fn locate_year_start(year: i32) -> Result<YearStart> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(Error::invalid_lunar(1, 1, year));
    }
    Ok(year_start(year))
}

/// Locates a year known to lie within [`SUPPORTED_YEARS`] (or one past it),
/// where lunation numbers fit in an `i32`.
fn year_start(year: i32) -> YearStart {
    let (day, month) = TET_WINDOW_OPENS;
    let window = gregorian_to_julian_day(day, month, year);
    let mut k = ((window.0 - LUNATION_EPOCH) / SYNODIC_MONTH).ceil() as i32;
    if new_moon(k) < window {
        k += 1;
    } else if new_moon(k - 1) >= window {
        k -= 1;
    }
    let start = YearStart {
        year,
        lunation: k,
        new_moon: new_moon(k),
    };
    debug!("lunar year {} starts at lunation {} (JD {:.5})", year, k, start.new_moon.0);
    start
}

impl YearStart {
    /// Finds the lunar year containing `date`.
    ///
    /// Tết never precedes the Tết window, so a date before the new moon
    /// located for its solar year belongs to the previous lunar year. One step
    /// back is the only correction applied.
    pub fn containing(date: Date) -> Self {
        let solar_year = date.year();
        let start = year_start(solar_year);
        if date.julian_day() < start.new_moon {
            year_start(solar_year - 1)
        } else {
            start
        }
    }
    /// Lunar year number, equal to the solar year Tết falls in.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Lunation number of the first month.
    pub fn lunation(&self) -> i32 {
        self.lunation
    }
    /// Instant of the new moon.
    pub fn new_moon(&self) -> JulianDay {
        self.new_moon
    }
    /// Returns the number of months in the lunar year: 12, or 13 with a leap
    /// month.
    pub fn month_count(&self) -> u32 {
        (year_start(self.year + 1).lunation - self.lunation) as u32
    }
    /// Returns `true` if the year has a leap month.
    pub fn has_leap_month(&self) -> bool {
        self.month_count() == 13
    }
}
