//! Solar (Gregorian) dates and the calendar data model.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};
use crate::julian::{self, JulianDay};
use crate::lunar::LunarDate;

/// A validated Gregorian date, stored as its Julian day number.
///
/// Dates are ordered chronologically and support day arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` from a Gregorian calendar date.
    ///
    /// Fails with [`Error::InvalidDate`] when `month` is not in `1..=12`,
    /// `day` is not a day of that month (leap years taken into account), or
    /// the date precedes the Gregorian reform of 15 October 1582. Earlier
    /// days are only reachable through [`Date::from_jdn`], and
    /// [`Date::gregorian`] reads them in the Julian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(1, 1, 2000).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(29, 2, 2023).is_err());
    /// assert!(Date::from_gregorian(1, 1, 1000).is_err());
    /// ```
    pub fn from_gregorian(day: u32, month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=days_in_month(month, year)).contains(&day) {
            return Err(Error::invalid_solar(day, month, year));
        }
        let jd = julian::gregorian_to_julian_day(day, month, year);
        if jd.jdn() < julian::GREGORIAN_REFORM_JDN {
            return Err(Error::invalid_solar(day, month, year));
        }
        Self::from_julian_day(jd).ok_or_else(|| Error::invalid_solar(day, month, year))
    }
    /// Returns the date containing the instant `jd`, if representable.
    pub fn from_julian_day(jd: JulianDay) -> Option<Self> {
        u32::try_from(jd.jdn()).ok().map(Self::from_jdn)
    }
    /// Returns the Julian day at the midnight (UT) starting this date.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay(self.jdn as f64 - 0.5)
    }

    /// Represents the date in Gregorian calendar, in `(day, month, year)`
    /// format. Days before 15 October 1582 are given in the Julian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_jdn(2460351);
    /// assert_eq!((10, 2, 2024), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (u32, u32, i32) {
        julian::julian_day_to_gregorian(self.julian_day())
    }
    pub fn day(&self) -> u32 {
        self.gregorian().0
    }
    pub fn month(&self) -> u32 {
        self.gregorian().1
    }
    pub fn year(&self) -> i32 {
        self.gregorian().2
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(8, 9, 2021).unwrap();
    /// assert_eq!("2021-09-08", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (d, m, y) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(1, 1, 2000).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
    /// Returns the sexagenary (can chi) day number of the date, numbered from
    /// 1 (Giáp Tý) to 60 (Quý Hợi). See [`crate::lunar::fmt::sexagenary`].
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(1, 1, 2000).unwrap();
    /// assert_eq!(55, date.sexagenary()); // Mậu Ngọ
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }

    /// Converts the date into the lunar calendar.
    ///
    /// Shorthand for [`LunarDate::from_date`].
    pub fn to_lunar(&self) -> LunarDate {
        LunarDate::from_date(*self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, m, y) = self.gregorian();
        write!(f, "{:02}/{:02}/{:04}", d, m, y)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Returns the number of days of a Gregorian month, `0` if `month` is not in
/// `1..=12`.
///
/// # Example
///
/// ```
/// use amlich::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2, 2024));
/// assert_eq!(28, days_in_month(2, 2100));
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}

/// The calendar a date or a holiday is expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarSystem {
    /// Gregorian calendar (dương lịch).
    Solar,
    /// Vietnamese lunar calendar (âm lịch).
    Lunar,
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalendarSystem::Solar => "solar",
            CalendarSystem::Lunar => "lunar",
        })
    }
}

/// A date in either calendar system.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarDate {
    Solar(Date),
    Lunar(LunarDate),
}

impl CalendarDate {
    pub fn system(&self) -> CalendarSystem {
        match self {
            CalendarDate::Solar(_) => CalendarSystem::Solar,
            CalendarDate::Lunar(_) => CalendarSystem::Lunar,
        }
    }
    /// Resolves the date to the solar calendar.
    pub fn to_solar(&self) -> Result<Date> {
        match self {
            CalendarDate::Solar(date) => Ok(*date),
            CalendarDate::Lunar(lunar) => lunar.to_date(),
        }
    }
    /// Resolves the date to the lunar calendar.
    pub fn to_lunar(&self) -> LunarDate {
        match self {
            CalendarDate::Solar(date) => date.to_lunar(),
            CalendarDate::Lunar(lunar) => *lunar,
        }
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        CalendarDate::Solar(date)
    }
}

impl From<LunarDate> for CalendarDate {
    fn from(date: LunarDate) -> Self {
        CalendarDate::Lunar(date)
    }
}
