//! New moon estimation.
//!
//! New moons are indexed by lunation number `k`, counted from the new moon of
//! 2000-01-06 (`k = 0`). The mean lunation is corrected with a truncated
//! periodic series; the result is accurate to well under a day, which is
//! enough to place month boundaries for civil use but may attribute a date
//! lying right at a boundary to the wrong month.

use crate::julian::JulianDay;

/// Mean length of a synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588861;

/// Julian day of the mean new moon of lunation 0.
pub const LUNATION_EPOCH: f64 = 2451550.09766;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Periodic corrections as `(amplitude in days, phase in degrees, rate in
/// degrees per century of lunations)`.
const PERIODIC_TERMS: [(f64, f64, f64); 21] = [
    (0.00915, 178.18102, 360.9465571),
    (-0.00383, 355.30226, 359.0966543),
    (0.00226, 234.95742, 19.0860920),
    (0.00154, 352.91309, 328.4545314),
    (0.00125, 325.71528, 12.9590088),
    (0.00110, 155.71993, 331.2391741),
    (0.00098, 34.52410, 4.8694955),
    (0.00047, 232.35108, 19.3744470),
    (0.00035, 235.59665, 7.4606679),
    (0.00030, 267.20768, 331.5766309),
    (0.00027, 290.27129, 4.7581314),
    (0.00023, 21.02754, 628.5537314),
    (0.00020, 162.40698, 715.2000061),
    (0.00019, 203.00191, 1.9160119),
    (0.00017, 234.27809, 7.4592200),
    (0.00014, 46.59303, 11.8408888),
    (0.00014, 99.30718, 4533.4294782),
    (0.00013, 193.35053, 64.8042952),
    (0.00012, 252.17436, 149.4812441),
    (0.00012, 45.16034, -67.5246091),
    (0.00011, 296.72796, 9.9692612),
];

/// Returns the instant (UT Julian day) of new moon number `k`.
///
/// Fractional `k` interpolates between lunations.
///
/// # Example
///
/// ```
/// use amlich::lunar::ephemeris::new_moon_day;
///
/// let jd = new_moon_day(0.0);
/// assert!((jd.0 - 2451550.0953).abs() < 1e-3);
/// ```
pub fn new_moon_day(k: f64) -> JulianDay {
    let t = k / LUNATIONS_PER_CENTURY;
    let correction: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(amplitude, phase, rate)| amplitude * (phase + rate * t).to_radians().sin())
        .sum();
    JulianDay(LUNATION_EPOCH + SYNODIC_MONTH * k + correction)
}

/// Shorthand for [`new_moon_day`] with an integral lunation number.
pub fn new_moon(k: i32) -> JulianDay {
    new_moon_day(k as f64)
}

/// Returns the lunation number whose new moon is nearest below `jd`, from the
/// mean lunation only. The corrected new moon may still lie on either side of
/// `jd`; see [`lunation_containing`].
pub fn mean_lunation_before(jd: JulianDay) -> i32 {
    ((jd.0 - 2451550.1) / SYNODIC_MONTH).floor() as i32
}

/// Returns the lunation `k` with `new_moon(k) <= jd < new_moon(k + 1)`.
///
/// # Example
///
/// ```
/// use amlich::julian::gregorian_to_julian_day;
/// use amlich::lunar::ephemeris::{lunation_containing, new_moon};
///
/// let jd = gregorian_to_julian_day(10, 2, 2024);
/// let k = lunation_containing(jd);
/// assert!(new_moon(k) <= jd && jd < new_moon(k + 1));
/// ```
pub fn lunation_containing(jd: JulianDay) -> i32 {
    let k = mean_lunation_before(jd);
    if jd < new_moon(k) {
        k - 1
    } else if jd >= new_moon(k + 1) {
        k + 1
    } else {
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::gregorian_to_julian_day;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn epoch() {
        assert_abs_diff_eq!(2451550.0953267, new_moon(0).0, epsilon = 1e-6);
        // Series is bounded by the sum of amplitudes.
        let bound: f64 = PERIODIC_TERMS.iter().map(|t| t.0.abs()).sum();
        for k in [-1000, -1, 1, 300, 1000] {
            let mean = LUNATION_EPOCH + SYNODIC_MONTH * k as f64;
            assert!((new_moon(k).0 - mean).abs() <= bound, "k = {k}");
        }
    }

    #[test]
    fn new_moons() {
        // 2024-02-09, 16:44 UT
        let jd = new_moon(298);
        assert_eq!((9, 2, 2024), crate::julian::julian_day_to_gregorian(jd));
        assert!(jd < gregorian_to_julian_day(10, 2, 2024));
    }

    #[test]
    fn containing() {
        for (d, m, y) in [(10, 2, 2024), (22, 1, 2023), (1, 1, 2000), (31, 12, 2099)] {
            let jd = gregorian_to_julian_day(d, m, y);
            let k = lunation_containing(jd);
            assert!(new_moon(k) <= jd, "{d}/{m}/{y}");
            assert!(jd < new_moon(k + 1), "{d}/{m}/{y}");
        }
    }

    #[test]
    fn fractional_lunation() {
        let half = new_moon_day(0.5).0;
        assert!(new_moon(0).0 < half && half < new_moon(1).0);
    }

    proptest! {
        #[test]
        fn prop_synodic_spacing(k in -20_000i32..20_000) {
            let spacing = new_moon(k + 1).0 - new_moon(k).0;
            prop_assert!((spacing - SYNODIC_MONTH).abs() < 0.6);
        }

        #[test]
        fn prop_monotonic(k in -20_000i32..20_000) {
            prop_assert!(new_moon(k) < new_moon(k + 1));
        }
    }
}
