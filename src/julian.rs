//! Conversion between Gregorian calendar dates and Julian days.
//!
//! A [`JulianDay`] is a continuous count of days, fractional part included,
//! and serves as the pivot between the solar and the lunar calendar. Civil
//! days start at midnight, i.e. at `JDN - 0.5`.

/// A [Julian date](https://en.wikipedia.org/wiki/Julian_day), real valued.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDay(pub f64);

/// First day of the Gregorian calendar (1582-10-15) as a Julian day number.
pub const GREGORIAN_REFORM_JDN: i64 = 2299161;

impl JulianDay {
    /// Returns the Julian day number (JDN) of the civil day containing this
    /// instant, in UT.
    pub fn jdn(&self) -> i64 {
        (self.0 + 0.5).floor() as i64
    }
    /// Returns the first midnight (UT) at or after this instant.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::julian::JulianDay;
    ///
    /// assert_eq!(JulianDay(2451545.5), JulianDay(2451544.7).next_midnight());
    /// assert_eq!(JulianDay(2451544.5), JulianDay(2451544.5).next_midnight());
    /// ```
    pub fn next_midnight(&self) -> JulianDay {
        JulianDay((self.0 - 0.5).ceil() + 0.5)
    }
}

/// Computes the Julian day at midnight (UT) starting a Gregorian date.
///
/// No range check is performed; see [`crate::Date::from_gregorian`] for the
/// validated entry point.
///
/// # Example
///
/// ```
/// use amlich::julian::{gregorian_to_julian_day, JulianDay};
///
/// assert_eq!(JulianDay(2451544.5), gregorian_to_julian_day(1, 1, 2000));
/// ```
pub fn gregorian_to_julian_day(day: u32, month: u32, year: i32) -> JulianDay {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    JulianDay(
        (365.25 * (y + 4716) as f64).floor()
            + (30.6001 * (m + 1) as f64).floor()
            + (day as i64 + b) as f64
            - 1524.5,
    )
}

/// Converts a Julian day back into a Gregorian `(day, month, year)`.
///
/// The civil day containing `jd` is returned. Julian days before the
/// Gregorian reform are read as dates of the Julian calendar.
///
/// # Example
///
/// ```
/// use amlich::julian::{julian_day_to_gregorian, JulianDay};
///
/// assert_eq!((1, 1, 2000), julian_day_to_gregorian(JulianDay(2451544.5)));
/// assert_eq!((10, 2, 2024), julian_day_to_gregorian(JulianDay(2460350.9)));
/// ```
pub fn julian_day_to_gregorian(jd: JulianDay) -> (u32, u32, i32) {
    let z = jd.jdn();
    let a = if z < GREGORIAN_REFORM_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1867216.25) / 36524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (day as u32, month as u32, year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::days_in_month;

    #[test]
    fn to_julian_day() {
        assert_eq!(JulianDay(2440587.5), gregorian_to_julian_day(1, 1, 1970));
        assert_eq!(JulianDay(2459465.5), gregorian_to_julian_day(8, 9, 2021));
        assert_eq!(JulianDay(2460350.5), gregorian_to_julian_day(10, 2, 2024));
    }

    #[test]
    fn from_julian_day() {
        assert_eq!((1, 1, 1970), julian_day_to_gregorian(JulianDay(2440587.5)));
        assert_eq!((8, 9, 2021), julian_day_to_gregorian(JulianDay(2459465.5)));
        // 1582-10-04 (Julian) was followed by 1582-10-15 (Gregorian)
        assert_eq!((4, 10, 1582), julian_day_to_gregorian(JulianDay(2299159.5)));
        assert_eq!((15, 10, 1582), julian_day_to_gregorian(JulianDay(2299160.5)));
    }

    #[test]
    fn leap_day() {
        let feb28 = gregorian_to_julian_day(28, 2, 2024);
        let feb29 = gregorian_to_julian_day(29, 2, 2024);
        let mar1 = gregorian_to_julian_day(1, 3, 2024);
        assert_eq!(1.0, feb29.0 - feb28.0);
        assert_eq!(1.0, mar1.0 - feb29.0);
        let feb28 = gregorian_to_julian_day(28, 2, 2023);
        let mar1 = gregorian_to_julian_day(1, 3, 2023);
        assert_eq!(1.0, mar1.0 - feb28.0);
    }

    #[test]
    fn round_trip_1900_2100() {
        let mut last = gregorian_to_julian_day(31, 12, 1899);
        for year in 1900..=2100 {
            for month in 1..=12 {
                for day in 1..=days_in_month(month, year) {
                    let jd = gregorian_to_julian_day(day, month, year);
                    assert_eq!(1.0, jd.0 - last.0, "{year:04}-{month:02}-{day:02}");
                    assert_eq!((day, month, year), julian_day_to_gregorian(jd));
                    last = jd;
                }
            }
        }
    }

    #[test]
    fn midnights() {
        assert_eq!(2451545, JulianDay(2451544.5).jdn());
        assert_eq!(2451545, JulianDay(2451545.49).jdn());
        assert_eq!(JulianDay(2460350.5), JulianDay(2460350.0).next_midnight());
    }
}
