//! Vietnamese lunar calendar (âm lịch).
//!
//! A lunar month starts on the first civil day whose midnight (UT) follows
//! the new moon, see [`ephemeris`]. A lunar year starts with the first new
//! moon of the Tết window, see [`year`], and holds 12 or 13 months. Months are
//! numbered by their position in the year, `1..=13`: the algorithm does not
//! determine which one is intercalary, so dates converted from the solar
//! calendar always have `is_leap_month == false`.
//!
//! # Example
//!
//! ```
//! use amlich::lunar;
//!
//! let tet = lunar::solar_to_lunar(10, 2, 2024).unwrap();
//! assert_eq!((1, 1, 2024), (tet.day, tet.month, tet.year));
//!
//! let date = lunar::lunar_to_solar(1, 1, 2024, false).unwrap();
//! assert_eq!((10, 2, 2024), date.gregorian());
//! ```

use std::fmt::{self as stdfmt, Display};

use log::{debug, warn};

use crate::date::Date;
use crate::error::{Error, Result};
use crate::julian::{GREGORIAN_REFORM_JDN, JulianDay};
use ephemeris::new_moon;
use year::{YearStart, locate_year_start};

pub mod ephemeris;
pub mod fmt;
pub mod year;

/// Number of months scanned from the start of a lunar year when looking for
/// the month of a date; a lunar year never holds more.
pub const MONTH_SCAN_LIMIT: u32 = 13;

/// Month reported when the scan finds no month containing the date.
const FALLBACK_MONTH: u32 = 1;

/// A date of the lunar calendar.
///
/// Ordered chronologically within the same `is_leap_month` setting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    /// Position of the month in the lunar year, `1..=13`.
    pub month: u32,
    /// Day of the month, `1..=30`.
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Creates a lunar date, checking `day` is in `1..=30` and `month` in
    /// `1..=13`.
    ///
    /// Whether month 13 exists in `year` is only checked on conversion, see
    /// [`lunar_to_solar`].
    pub fn new(day: u32, month: u32, year: i32, is_leap_month: bool) -> Result<Self> {
        if !(1..=30).contains(&day) || !(1..=MONTH_SCAN_LIMIT).contains(&month) {
            return Err(Error::invalid_lunar(day, month, year));
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Converts a solar date into the lunar calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::lunar::LunarDate;
    ///
    /// let date = Date::from_gregorian(22, 1, 2023).unwrap();
    /// let lunar = LunarDate::from_date(date);
    ///
    /// assert_eq!((1, 1, 2023), (lunar.day, lunar.month, lunar.year));
    /// ```
    pub fn from_date(date: Date) -> Self {
        lunar_date_of(date)
    }

    /// Converts the date back into the solar calendar, see [`lunar_to_solar`].
    pub fn to_date(&self) -> Result<Date> {
        lunar_to_solar(self.day, self.month, self.year, self.is_leap_month)
    }

    /// Returns the date in `(day, month, year)` format.
    pub fn dmy(&self) -> (u32, u32, i32) {
        (self.day, self.month, self.year)
    }

    /// Traditional name of the month, e.g. "Tháng Giêng". `None` for the
    /// 13th month of a leap year.
    pub fn month_name(&self) -> Option<String> {
        fmt::month(self.month, self.is_leap_month)
    }

    /// Traditional name of the day, e.g. "Mùng 1". `None` if `day` is not in
    /// `1..=30`.
    pub fn day_name(&self) -> Option<String> {
        (1..=30).contains(&self.day).then(|| fmt::day(self.day))
    }

    /// Can chi name of the year, e.g. "Giáp Thìn".
    pub fn year_name(&self) -> String {
        fmt::sexagenary(sexagenary_for_year(self.year))
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)?;
        if self.is_leap_month {
            f.write_str(" (nhuận)")?;
        }
        Ok(())
    }
}

/// Converts a Gregorian date into the lunar calendar.
///
/// Fails with [`Error::InvalidDate`] if the solar date does not exist.
///
/// # Example
///
/// ```
/// use amlich::lunar::solar_to_lunar;
///
/// let date = solar_to_lunar(22, 1, 2023).unwrap();
/// assert_eq!((1, 1, 2023), date.dmy());
/// ```
pub fn solar_to_lunar(day: u32, month: u32, year: i32) -> Result<LunarDate> {
    let date = Date::from_gregorian(day, month, year)?;
    Ok(LunarDate::from_date(date))
}

/// Converts a lunar date into the Gregorian calendar.
///
/// `month` is the position of the month in the lunar year, as returned by
/// [`solar_to_lunar`]. Fails with [`Error::InvalidDate`] if `day` is not in
/// `1..=30`, `month` not in `1..=13`, `year` not in
/// [`year::SUPPORTED_YEARS`] or the result precedes the Gregorian reform
/// (15 October 1582), and with [`Error::NoLeapMonth`] if month 13 is
/// requested for a year of 12 months.
///
/// `is_leap_month` does not move the month: the same lunation is used either
/// way, and the flag only widens the bound a day may reach before being
/// reported (logged) as overflowing its month.
///
/// # Example
///
/// ```
/// use amlich::lunar::lunar_to_solar;
///
/// let date = lunar_to_solar(1, 1, 2023, false).unwrap();
/// assert_eq!("2023-01-22", date.iso_gregorian());
/// ```
pub fn lunar_to_solar(day: u32, month: u32, year: i32, is_leap_month: bool) -> Result<Date> {
    let lunar = LunarDate::new(day, month, year, is_leap_month)?;
    let start = locate_year_start(year)?;
    if month > start.month_count() {
        return Err(Error::NoLeapMonth { year });
    }

    let k = start.lunation() + month as i32 - 1;
    let month_end = if is_leap_month {
        debug!("{}: leap flag set, month start unchanged", lunar);
        new_moon(k + 2)
    } else {
        new_moon(k + 1)
    };
    let jd = JulianDay(new_moon(k).next_midnight().0 + (day - 1) as f64);
    if jd >= month_end {
        warn!("lunar date {} lies past the end of its month", lunar);
    }
    if jd.jdn() < GREGORIAN_REFORM_JDN {
        return Err(Error::invalid_lunar(day, month, year));
    }
    Date::from_julian_day(jd).ok_or_else(|| Error::invalid_lunar(day, month, year))
}

fn lunar_date_of(date: Date) -> LunarDate {
    let jd = date.julian_day();
    let k = ephemeris::lunation_containing(jd);
    // truncated, not rounded
    let day = ((jd.0 - new_moon(k).0 + 1.0) as i64).clamp(1, 30) as u32;

    let start = YearStart::containing(date);
    LunarDate {
        year: start.year(),
        month: month_of(jd, &start),
        day,
        is_leap_month: false,
    }
}

/// Finds the month of the lunar year beginning at `start` that contains
/// `jd`, scanning at most [`MONTH_SCAN_LIMIT`] months.
fn month_of(jd: JulianDay, start: &YearStart) -> u32 {
    for month in 1..=MONTH_SCAN_LIMIT {
        let k = start.lunation() + month as i32 - 1;
        if new_moon(k) <= jd && jd < new_moon(k + 1) {
            return month;
        }
    }
    warn!(
        "JD {:.1} not within {} months of lunar year {}, reporting month {}",
        jd.0,
        MONTH_SCAN_LIMIT,
        start.year(),
        FALLBACK_MONTH
    );
    FALLBACK_MONTH
}

/// Returns the can chi number of a lunar year, from 1 (Giáp Tý) to 60
/// (Quý Hợi).
///
/// # Example
///
/// ```
/// use amlich::lunar::{fmt, sexagenary_for_year};
///
/// assert_eq!(1, sexagenary_for_year(1984));
/// assert_eq!("Giáp Thìn", fmt::sexagenary(sexagenary_for_year(2024)));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
